//! Entity structs for all Campus domain objects.
//!
//! Each entity maps to a table in the libSQL catalog store (see
//! `campus-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.

mod certification;
mod course;
mod enquiry;
mod news;
mod offering;
mod profile;
mod stream;
mod subscription;
mod university;

pub use certification::{CertificationCategory, CertificationCourse};
pub use course::Course;
pub use enquiry::{Enquiry, EnquiryTarget, NewEnquiry};
pub use news::NewsItem;
pub use offering::UniversityCourseLink;
pub use profile::UserProfile;
pub use stream::Stream;
pub use subscription::NewsletterSubscription;
pub use university::University;

/// A row with an identifier and a display name.
///
/// Implemented by every entity that can appear in a label lookup, a
/// mega-menu column, or a filter sidebar.
pub trait CatalogRow {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

macro_rules! impl_catalog_row {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl CatalogRow for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn name(&self) -> &str {
                    &self.name
                }
            }
        )+
    };
}

impl_catalog_row!(
    Stream,
    Course,
    University,
    CertificationCategory,
    CertificationCourse,
);
