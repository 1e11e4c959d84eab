//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files, working directory, and env vars.

use beacon_config::{BeaconConfig, ConfigError};
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_backend_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[backend]
base_url = "http://directory.internal:9000"
user_agent = "beacon-test"
"#,
        )?;

        let config: BeaconConfig = Figment::from(Serialized::defaults(BeaconConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.backend.base_url, "http://directory.internal:9000");
        assert_eq!(config.backend.user_agent, "beacon-test");
        assert_eq!(config.general.default_format, "table");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_format = "json"
"#,
        )?;

        let config: BeaconConfig = Figment::from(Serialized::defaults(BeaconConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_format, "json");
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[backend]
base_url = "http://from-toml:8000"
"#,
        )?;
        jail.set_env("BEACON_BACKEND__BASE_URL", "http://from-env:8000");

        let config: BeaconConfig = Figment::from(Serialized::defaults(BeaconConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("BEACON_").split("__"))
            .extract()?;

        assert_eq!(config.backend.base_url, "http://from-env:8000");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".beacon")?;
        jail.create_file(
            ".beacon/config.toml",
            r#"
[backend]
base_url = "https://project.example.com"
"#,
        )?;

        let config = BeaconConfig::load().expect("config loads");
        assert_eq!(config.backend.base_url, "https://project.example.com");
        Ok(())
    });
}

#[cfg(target_os = "linux")]
#[test]
fn project_config_beats_user_config() {
    Jail::expect_with(|jail| {
        let xdg = jail.directory().join("xdg");
        jail.create_dir("xdg/beacon")?;
        jail.create_file(
            "xdg/beacon/config.toml",
            r#"
[backend]
base_url = "https://user.example.com"
user_agent = "from-user"
"#,
        )?;
        jail.create_dir(".beacon")?;
        jail.create_file(
            ".beacon/config.toml",
            r#"
[backend]
base_url = "https://project.example.com"
"#,
        )?;
        jail.set_env("XDG_CONFIG_HOME", xdg.display());

        let config = BeaconConfig::load().expect("config loads");
        assert_eq!(config.backend.base_url, "https://project.example.com");
        assert_eq!(config.backend.user_agent, "from-user");
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_base_url() {
    Jail::expect_with(|jail| {
        jail.set_env("BEACON_BACKEND__BASE_URL", "localhost:8000");

        let err = BeaconConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "backend.base_url"));
        Ok(())
    });
}
