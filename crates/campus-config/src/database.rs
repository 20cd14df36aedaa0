//! Catalog store configuration: a local libSQL file or a remote database.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Database file inside the project directory when no path is configured.
pub const DEFAULT_DB_FILE: &str = ".campus/campus.db";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file. Relative paths resolve against the project root.
    #[serde(default)]
    pub path: String,

    /// Remote database URL (e.g., `libsql://campus.example.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl DatabaseConfig {
    /// Check if the remote database has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Resolve the local database file for a project.
    #[must_use]
    pub fn local_path(&self, project_root: &Path) -> PathBuf {
        if self.path.is_empty() {
            project_root.join(DEFAULT_DB_FILE)
        } else {
            let configured = PathBuf::from(&self.path);
            if configured.is_absolute() {
                configured
            } else {
                project_root.join(configured)
            }
        }
    }
}
