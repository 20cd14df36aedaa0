use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewsletterSubscription {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
