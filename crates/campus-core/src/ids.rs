//! ID prefixes for generated entity identifiers.
//!
//! Every row ID is `<prefix>-<8 hex chars>`, generated inside libSQL.

pub const PREFIX_STREAM: &str = "str";
pub const PREFIX_COURSE: &str = "crs";
pub const PREFIX_UNIVERSITY: &str = "uni";
pub const PREFIX_CERT_CATEGORY: &str = "cat";
pub const PREFIX_CERT_COURSE: &str = "crt";
pub const PREFIX_ENQUIRY: &str = "enq";
pub const PREFIX_PROFILE: &str = "usr";
pub const PREFIX_NEWS: &str = "nws";
pub const PREFIX_SUBSCRIPTION: &str = "sub";

/// All prefixes, used by ID generation tests.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_STREAM,
    PREFIX_COURSE,
    PREFIX_UNIVERSITY,
    PREFIX_CERT_CATEGORY,
    PREFIX_CERT_COURSE,
    PREFIX_ENQUIRY,
    PREFIX_PROFILE,
    PREFIX_NEWS,
    PREFIX_SUBSCRIPTION,
];
