//! User profile repository and principal resolution.

use campus_core::entities::UserProfile;
use campus_core::enums::Role;
use campus_core::identity::Principal;
use campus_core::ids::PREFIX_PROFILE;
use chrono::Utc;

use crate::error::DatabaseError;
use crate::helpers::{UpdateSql, get_opt_string, parse_datetime, required};
use crate::service::CatalogService;
use crate::updates::profile::ProfileUpdate;

const PROFILE_COLUMNS: &str =
    "id, name, email, phone, current_class, role, admin_remark, created_at";

/// Sign-up input. `id` is the auth provider's user ID when one exists.
#[derive(Debug, Clone, Default)]
pub struct NewProfile {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub current_class: Option<String>,
}

fn row_to_profile(row: &libsql::Row) -> Result<UserProfile, DatabaseError> {
    Ok(UserProfile {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        email: row.get::<String>(2)?,
        phone: get_opt_string(row, 3)?,
        current_class: get_opt_string(row, 4)?,
        role: Role::from_stored(&row.get::<String>(5)?),
        admin_remark: get_opt_string(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl CatalogService {
    /// Create a student profile.
    pub async fn register_profile(&self, input: &NewProfile) -> Result<UserProfile, DatabaseError> {
        let name = required(&input.name, "Name is required.")?;
        let email = required(&input.email, "Email is required.")?;
        if !email.contains('@') {
            return Err(DatabaseError::validation("Please enter a valid email address."));
        }

        let id = match input.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.db().generate_id(PREFIX_PROFILE).await?,
        };
        let now = Utc::now();

        self.db()
            .execute_with(
                "INSERT INTO user_profiles (id, name, email, phone, current_class, role, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                || {
                    libsql::params![
                        id.as_str(),
                        name,
                        email,
                        input.phone.as_deref(),
                        input.current_class.as_deref(),
                        Role::Student.as_str(),
                        now.to_rfc3339()
                    ]
                },
            )
            .await?;

        tracing::info!(profile_id = %id, "registered profile");
        Ok(UserProfile {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: input.phone.clone(),
            current_class: input.current_class.clone(),
            role: Role::Student,
            admin_remark: None,
            created_at: now,
        })
    }

    pub async fn get_profile(&self, id: &str) -> Result<UserProfile, DatabaseError> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE id = ?1");
        let mut rows = self.db().query_with(&sql, || [id]).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(format!("Profile {id} not found.")))?;
        row_to_profile(&row)
    }

    /// Look up the role for a signed-in user. `None` when no profile exists.
    pub async fn resolve_principal(&self, id: &str) -> Result<Option<Principal>, DatabaseError> {
        let mut rows = self
            .db()
            .query_with("SELECT role FROM user_profiles WHERE id = ?1", || [id])
            .await?;
        let Some(row) = rows.next().await? else {
            tracing::debug!(user_id = id, "no profile for user");
            return Ok(None);
        };
        Ok(Some(Principal {
            id: id.to_string(),
            role: Role::from_stored(&row.get::<String>(0)?),
        }))
    }

    /// Apply a self-edit. Email and role are not editable here.
    pub async fn update_profile(
        &self,
        id: &str,
        update: ProfileUpdate,
    ) -> Result<UserProfile, DatabaseError> {
        let mut sql = UpdateSql::new();
        if let Some(ref name) = update.name {
            sql.set("name", required(name, "Name is required.")?);
        }
        if let Some(phone) = update.phone {
            sql.set("phone", phone);
        }
        if let Some(current_class) = update.current_class {
            sql.set("current_class", current_class);
        }
        if sql.is_empty() {
            return self.get_profile(id).await;
        }

        let (sql, params) = sql.finish("user_profiles", id);
        let affected = self
            .db()
            .execute_with(&sql, || libsql::params_from_iter(params.clone()))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(format!("Profile {id} not found.")));
        }
        self.get_profile(id).await
    }

    /// Administrator note on a student. Blank clears it.
    pub async fn set_admin_remark(
        &self,
        id: &str,
        remark: Option<&str>,
    ) -> Result<UserProfile, DatabaseError> {
        let remark = remark.map(str::trim).filter(|r| !r.is_empty());
        let affected = self
            .db()
            .execute_with(
                "UPDATE user_profiles SET admin_remark = ?1 WHERE id = ?2",
                || libsql::params![remark, id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(format!("Profile {id} not found.")));
        }
        self.get_profile(id).await
    }

    pub async fn set_role(&self, id: &str, role: Role) -> Result<UserProfile, DatabaseError> {
        let affected = self
            .db()
            .execute_with("UPDATE user_profiles SET role = ?1 WHERE id = ?2", || {
                libsql::params![role.as_str(), id]
            })
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(format!("Profile {id} not found.")));
        }
        tracing::info!(profile_id = id, %role, "changed role");
        self.get_profile(id).await
    }

    /// Registered users, newest first.
    pub async fn list_profiles(&self, limit: u32) -> Result<Vec<UserProfile>, DatabaseError> {
        let sql = format!(
            "SELECT {PROFILE_COLUMNS} FROM user_profiles ORDER BY created_at DESC LIMIT ?1"
        );
        let mut rows = self.db().query_with(&sql, || [i64::from(limit)]).await?;

        let mut profiles = Vec::new();
        while let Some(row) = rows.next().await? {
            profiles.push(row_to_profile(&row)?);
        }
        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::test_service;
    use crate::updates::profile::ProfileUpdateBuilder;

    use super::*;

    fn new_profile(name: &str, email: &str) -> NewProfile {
        NewProfile {
            name: name.into(),
            email: email.into(),
            ..NewProfile::default()
        }
    }

    #[tokio::test]
    async fn registers_as_student() {
        let svc = test_service().await;
        let profile = svc
            .register_profile(&new_profile("Ravi", "ravi@example.org"))
            .await
            .unwrap();
        assert_eq!(profile.role, Role::Student);
        assert!(profile.id.starts_with("usr-"));

        let principal = svc.resolve_principal(&profile.id).await.unwrap().unwrap();
        assert!(!principal.is_admin());
    }

    #[tokio::test]
    async fn keeps_external_id() {
        let svc = test_service().await;
        let profile = svc
            .register_profile(&NewProfile {
                id: Some("user_2abc".into()),
                ..new_profile("Ravi", "ravi@example.org")
            })
            .await
            .unwrap();
        assert_eq!(profile.id, "user_2abc");
    }

    #[tokio::test]
    async fn rejects_email_without_at() {
        let svc = test_service().await;
        let err = svc
            .register_profile(&new_profile("Ravi", "ravi.example.org"))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_user_has_no_principal() {
        let svc = test_service().await;
        assert_eq!(svc.resolve_principal("usr-missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn promotion_makes_admin() {
        let svc = test_service().await;
        let profile = svc
            .register_profile(&new_profile("Meera", "meera@example.org"))
            .await
            .unwrap();
        svc.set_role(&profile.id, Role::Admin).await.unwrap();

        let principal = svc.resolve_principal(&profile.id).await.unwrap().unwrap();
        assert!(principal.is_admin());
    }

    #[tokio::test]
    async fn self_edit_and_remark() {
        let svc = test_service().await;
        let profile = svc
            .register_profile(&new_profile("Ravi", "ravi@example.org"))
            .await
            .unwrap();

        let updated = svc
            .update_profile(
                &profile.id,
                ProfileUpdateBuilder::new()
                    .phone(Some("9800000001".into()))
                    .current_class(Some("11th".into()))
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(updated.phone.as_deref(), Some("9800000001"));
        assert_eq!(updated.email, "ravi@example.org");

        let remarked = svc
            .set_admin_remark(&profile.id, Some("interested in MBA"))
            .await
            .unwrap();
        assert_eq!(remarked.admin_remark.as_deref(), Some("interested in MBA"));

        let cleared = svc.set_admin_remark(&profile.id, Some("  ")).await.unwrap();
        assert_eq!(cleared.admin_remark, None);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let svc = test_service().await;
        svc.register_profile(&new_profile("First", "a@example.org"))
            .await
            .unwrap();
        svc.register_profile(&new_profile("Second", "b@example.org"))
            .await
            .unwrap();

        let profiles = svc.list_profiles(10).await.unwrap();
        assert_eq!(profiles[0].name, "Second");
        assert_eq!(profiles.len(), 2);
    }
}
