use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A broad academic category grouping courses (e.g. "Engineering").
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Stream {
    pub id: String,
    pub name: String,
}
