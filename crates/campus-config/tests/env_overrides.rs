use campus_config::CampusConfig;
use campus_core::enums::Breakpoint;
use figment::Jail;

#[test]
fn nested_env_keys_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("CAMPUS_DATABASE__URL", "libsql://env.example.io");
        jail.set_env("CAMPUS_DATABASE__AUTH_TOKEN", "env-token");
        jail.set_env("CAMPUS_AUTH__USER_ID", "usr-00000002");

        let config = CampusConfig::load().expect("config loads");
        assert_eq!(config.database.url, "libsql://env.example.io");
        assert!(config.database.is_configured());
        assert_eq!(config.auth.user_id, "usr-00000002");
        Ok(())
    });
}

#[test]
fn breakpoint_limit_can_be_set_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("CAMPUS_MENU__FILTER_COUNT__XL", "3");

        let config = CampusConfig::load().expect("config loads");
        assert_eq!(config.menu.filter_count_for(Breakpoint::Xl), 3);
        assert_eq!(config.menu.filter_count_for(Breakpoint::Sm), 5);
        Ok(())
    });
}

#[test]
fn single_underscore_keys_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("CAMPUS_DATABASE_URL", "libsql://typo.example.io");

        let config = CampusConfig::load().expect("config loads");
        assert!(config.database.url.is_empty());
        Ok(())
    });
}
