use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Profile created at sign-up. The ID is shared with the auth principal.
///
/// Students edit their own contact fields; only administrators write
/// `admin_remark`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub current_class: Option<String>,
    pub role: Role,
    pub admin_remark: Option<String>,
    pub created_at: DateTime<Utc>,
}
