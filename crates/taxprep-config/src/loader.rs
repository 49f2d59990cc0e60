//! Configuration loader (defaults + file + env merge).

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::TaxprepConfig;

/// Bare environment variable overriding `licensing.valid_license_id`.
pub const VALID_LICENSE_ID_ENV: &str = "VALID_LICENSE_ID";

/// Prefixed form of the same key; the `Env` provider would type `12345` as a number.
pub const PREFIXED_LICENSE_ID_ENV: &str = "TAXPREP_LICENSING__VALID_LICENSE_ID";

const LICENSE_ID_KEY: &str = "licensing.valid_license_id";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
    /// A value was loaded but is not usable.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Dotted key of the offending value.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`TAXPREP_` prefix, `__` separates sections)
/// 4. `TAXPREP_LICENSING__VALID_LICENSE_ID` then `VALID_LICENSE_ID`, taken verbatim
pub fn load_config(config_path: Option<&str>) -> Result<TaxprepConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(TaxprepConfig::default()));

    if let Some(path) = config_path {
        if !Path::new(path).is_file() {
            return Err(ConfigError::Load(format!("config file not found: {path}")));
        }
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("TAXPREP_").split("__"));

    // Read verbatim so numeric-looking ids stay strings.
    for var in [PREFIXED_LICENSE_ID_ENV, VALID_LICENSE_ID_ENV] {
        if let Ok(id) = std::env::var(var) {
            figment = figment.merge(Serialized::default(LICENSE_ID_KEY, id));
        }
    }

    let config: TaxprepConfig = figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

/// Checks cross-field constraints serde cannot express.
pub fn validate(config: &TaxprepConfig) -> Result<(), ConfigError> {
    if config.licensing.valid_license_id.is_empty() {
        return Err(ConfigError::Invalid {
            field: "licensing.valid_license_id",
            reason: "must not be empty".into(),
        });
    }

    let prefix = config.server.api_prefix.as_str();
    if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
        return Err(ConfigError::Invalid {
            field: "server.api_prefix",
            reason: format!("'{prefix}' must start with '/' and must not end with '/'"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&TaxprepConfig::default()).is_ok());
    }

    #[test]
    fn empty_license_id_rejected() {
        let mut config = TaxprepConfig::default();
        config.licensing.valid_license_id.clear();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("licensing.valid_license_id"));
    }

    #[test]
    fn prefix_without_leading_slash_rejected() {
        let mut config = TaxprepConfig::default();
        config.server.api_prefix = "api".into();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn prefix_with_trailing_slash_rejected() {
        let mut config = TaxprepConfig::default();
        config.server.api_prefix = "/api/".into();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn api_prefix_accepted() {
        let mut config = TaxprepConfig::default();
        config.server.api_prefix = "/api".into();
        assert!(validate(&config).is_ok());
    }
}
