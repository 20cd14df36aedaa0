use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A homepage news ticker entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewsItem {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
