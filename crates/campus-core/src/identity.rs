use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::errors::CoreError;

/// The authenticated caller, resolved once at the application boundary.
///
/// Produced by `campus-cli` from the configured user ID and the stored
/// profile role. Downstream code receives `Option<&Principal>` and never
/// queries the role again.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Principal {
    /// Profile ID shared with the auth provider.
    pub id: String,
    pub role: Role,
}

impl Principal {
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// Single capability check for administrator-only operations.
///
/// # Errors
///
/// Returns `CoreError::Validation` when no principal is signed in or the
/// principal is not an administrator.
pub fn require_admin(principal: Option<&Principal>) -> Result<&Principal, CoreError> {
    match principal {
        Some(p) if p.is_admin() => Ok(p),
        Some(p) => Err(CoreError::validation(format!(
            "user {} is not an administrator",
            p.id
        ))),
        None => Err(CoreError::validation("sign in as an administrator first")),
    }
}

/// Capability check for operations open to any signed-in user.
///
/// # Errors
///
/// Returns `CoreError::Validation` when no principal is signed in.
pub fn require_principal(principal: Option<&Principal>) -> Result<&Principal, CoreError> {
    principal.ok_or_else(|| CoreError::validation("sign in to continue"))
}
