//! Who the CLI acts as.
//!
//! Sign-in itself is handled by the hosted auth provider. Locally we only
//! keep the profile ID of the signed-in user; the role is looked up once
//! when the application context starts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Profile ID to act as when `--as` is not given.
    #[serde(default)]
    pub user_id: String,
}

impl AuthConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.user_id.trim().is_empty()
    }
}
