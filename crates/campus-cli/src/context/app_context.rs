use std::path::{Path, PathBuf};

use anyhow::Context;
use campus_config::CampusConfig;
use campus_core::identity::Principal;
use campus_db::service::CatalogService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: CatalogService,
    pub config: CampusConfig,
    pub project_root: PathBuf,
    /// The caller, resolved once from `--as` or `auth.user_id`.
    pub principal: Option<Principal>,
}

impl AppContext {
    /// Open the catalog store and resolve who is calling.
    pub async fn init(
        project_root: PathBuf,
        config: CampusConfig,
        as_user: Option<&str>,
    ) -> anyhow::Result<Self> {
        let service = open_service(&config, &project_root).await?;

        let user_id = as_user
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .or_else(|| Some(config.auth.user_id.trim()).filter(|id| !id.is_empty()));

        let principal = match user_id {
            Some(id) => {
                let principal = service
                    .resolve_principal(id)
                    .await
                    .context("failed to resolve current user")?;
                if principal.is_none() {
                    tracing::warn!(user_id = id, "no profile for this user; continuing signed out");
                }
                principal
            }
            None => None,
        };

        Ok(Self {
            service,
            config,
            project_root,
            principal,
        })
    }
}

/// Remote database when configured, otherwise the project's local file.
pub async fn open_service(
    config: &CampusConfig,
    project_root: &Path,
) -> anyhow::Result<CatalogService> {
    if config.database.is_configured() {
        tracing::debug!(url = %config.database.url, "opening remote catalog store");
        return CatalogService::new_remote(&config.database.url, &config.database.auth_token)
            .await
            .context("failed to open remote catalog store");
    }

    let path = config.database.local_path(project_root);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tracing::debug!(path = %path.display(), "opening local catalog store");
    CatalogService::new_local(&path.to_string_lossy())
        .await
        .with_context(|| format!("failed to open {}", path.display()))
}
