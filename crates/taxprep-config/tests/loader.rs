//! Integration tests for the layered config loader.

use figment::Jail;
use taxprep_config::{load_config, ConfigError};

#[test]
fn loads_defaults_without_file_or_env() {
    Jail::expect_with(|_jail| {
        let config = load_config(None).map_err(|e| e.to_string())?;
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.licensing.valid_license_id, "valid-license");
        Ok(())
    });
}

#[test]
fn file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "taxprep.toml",
            r#"
[server]
port = 9000
api_prefix = "/api"

[licensing]
valid_license_id = "from-file"
"#,
        )?;
        let config = load_config(Some("taxprep.toml")).map_err(|e| e.to_string())?;
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.api_prefix, "/api");
        assert_eq!(config.licensing.valid_license_id, "from-file");
        assert_eq!(config.logging.level, "info");
        Ok(())
    });
}

#[test]
fn prefixed_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("taxprep.toml", "[server]\nport = 9000\n")?;
        jail.set_env("TAXPREP_SERVER__PORT", "9100");
        jail.set_env("TAXPREP_LOGGING__LEVEL", "debug");
        let config = load_config(Some("taxprep.toml")).map_err(|e| e.to_string())?;
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn valid_license_id_env_wins() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "taxprep.toml",
            "[licensing]\nvalid_license_id = \"from-file\"\n",
        )?;
        jail.set_env("VALID_LICENSE_ID", "from-env");
        let config = load_config(Some("taxprep.toml")).map_err(|e| e.to_string())?;
        assert_eq!(config.licensing.valid_license_id, "from-env");
        Ok(())
    });
}

#[test]
fn numeric_license_id_stays_a_string() {
    Jail::expect_with(|jail| {
        jail.set_env("VALID_LICENSE_ID", "12345");
        let config = load_config(None).map_err(|e| e.to_string())?;
        assert_eq!(config.licensing.valid_license_id, "12345");
        Ok(())
    });
}

#[test]
fn numeric_prefixed_license_id_stays_a_string() {
    Jail::expect_with(|jail| {
        jail.set_env("TAXPREP_LICENSING__VALID_LICENSE_ID", "12345");
        let config = load_config(None).map_err(|e| e.to_string())?;
        assert_eq!(config.licensing.valid_license_id, "12345");
        Ok(())
    });
}

#[test]
fn bare_license_id_env_beats_prefixed() {
    Jail::expect_with(|jail| {
        jail.set_env("TAXPREP_LICENSING__VALID_LICENSE_ID", "prefixed");
        jail.set_env("VALID_LICENSE_ID", "bare");
        let config = load_config(None).map_err(|e| e.to_string())?;
        assert_eq!(config.licensing.valid_license_id, "bare");
        Ok(())
    });
}

#[test]
fn invalid_prefix_in_file_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("taxprep.toml", "[server]\napi_prefix = \"api/\"\n")?;
        let result = load_config(Some("taxprep.toml"));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
        Ok(())
    });
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let result = load_config(path.to_str());
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[server\nport = ").expect("write");
    let result = load_config(path.to_str());
    assert!(matches!(result, Err(ConfigError::Load(_))));
}
