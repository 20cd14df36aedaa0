use campus_config::CampusConfig;

/// A config section that `CAMPUS_<SECTION>__<KEY>` variables can fill.
struct EnvSection {
    prefix: &'static str,
    example: &'static str,
    configured: bool,
}

/// Warn when `CAMPUS_*` variables use a single underscore and so never
/// reached figment, leaving the section at its defaults.
pub fn warn_unconfigured(config: &CampusConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &CampusConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let keys: Vec<String> = env.into_iter().map(|(key, _)| key).collect();
    let sections = [
        EnvSection {
            prefix: "CAMPUS_DATABASE",
            example: "CAMPUS_DATABASE__URL",
            configured: config.database.is_configured() || !config.database.path.is_empty(),
        },
        EnvSection {
            prefix: "CAMPUS_AUTH",
            example: "CAMPUS_AUTH__USER_ID",
            configured: config.auth.is_configured(),
        },
    ];

    sections
        .iter()
        .filter(|section| !section.configured)
        .filter(|section| {
            let single = format!("{}_", section.prefix);
            let double = format!("{}__", section.prefix);
            keys.iter().any(|key| key.starts_with(&single))
                && !keys.iter().any(|key| key.starts_with(&double))
        })
        .map(|section| {
            format!(
                "{}* variables are set but the section is still default. \
                 Nest keys with double underscores (example: {}).",
                section.prefix, section.example
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use campus_config::{AuthConfig, CampusConfig, DatabaseConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = CampusConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("CAMPUS_DATABASE_URL".to_string(), "libsql://demo".to_string()),
                ("CAMPUS_AUTH_USER_ID".to_string(), "usr-1".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("CAMPUS_DATABASE__URL"));
        assert!(warnings[1].contains("CAMPUS_AUTH__USER_ID"));
    }

    #[test]
    fn does_not_warn_when_sections_are_configured() {
        let config = CampusConfig {
            database: DatabaseConfig {
                url: "libsql://demo".to_string(),
                auth_token: "token".to_string(),
                ..Default::default()
            },
            auth: AuthConfig {
                user_id: "usr-1".to_string(),
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("CAMPUS_DATABASE_URL".to_string(), "libsql://demo".to_string()),
                ("CAMPUS_AUTH_USER_ID".to_string(), "usr-1".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn double_underscore_keys_are_fine() {
        let config = CampusConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("CAMPUS_AUTH__USER_ID".to_string(), String::new())],
        );
        assert!(warnings.is_empty());
    }
}
