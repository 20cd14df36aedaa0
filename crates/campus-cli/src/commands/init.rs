use std::path::{Path, PathBuf};

use anyhow::Context;
use campus_config::{CampusConfig, PROJECT_DIR};
use campus_core::entities::UserProfile;
use campus_core::enums::Role;
use campus_db::repos::profile::NewProfile;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::open_service;
use crate::output::output;

const CONFIG_TEMPLATE: &str = r#"# Campus project configuration.
# Environment variables override these values: CAMPUS_<SECTION>__<KEY>.

[database]
# path = ".campus/campus.db"
# url = "libsql://campus.example.io"
# auth_token = ""

[general]
default_limit = 20
export_dir = "."

[auth]
# Profile ID the CLI acts as. `campus init --admin-name .. --admin-email ..`
# prints one.
# user_id = ""
"#;

#[derive(Debug, Serialize)]
struct InitResponse {
    project_root: String,
    config_file: String,
    config_created: bool,
    remote_database: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    admin: Option<UserProfile>,
}

/// Handle `campus init`.
pub async fn handle(
    args: &InitArgs,
    root: PathBuf,
    config: &CampusConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (config_file, config_created) = write_default_config(&root)?;
    let service = open_service(config, &root).await?;

    let admin = match (&args.admin_name, &args.admin_email) {
        (Some(name), Some(email)) => {
            let profile = service
                .register_profile(&NewProfile {
                    name: name.clone(),
                    email: email.clone(),
                    ..NewProfile::default()
                })
                .await
                .context("failed to create administrator profile")?;
            let admin = service.set_role(&profile.id, Role::Admin).await?;
            if !flags.quiet {
                eprintln!(
                    "Administrator created. Set CAMPUS_AUTH__USER_ID={} or pass --as {}.",
                    admin.id, admin.id
                );
            }
            Some(admin)
        }
        _ => None,
    };

    output(
        &InitResponse {
            project_root: root.display().to_string(),
            config_file: config_file.display().to_string(),
            config_created,
            remote_database: service.db().is_remote(),
            admin,
        },
        flags.format,
    )
}

/// Create `.campus/config.toml` unless one exists. Returns its path and
/// whether it was written.
fn write_default_config(root: &Path) -> anyhow::Result<(PathBuf, bool)> {
    let dir = root.join(PROJECT_DIR);
    std::fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let path = dir.join("config.toml");
    if path.exists() {
        return Ok((path, false));
    }
    std::fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok((path, true))
}
