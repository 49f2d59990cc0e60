//! # taxprep-config
//!
//! Configuration management for the taxprep API.
//! Supports layered config: defaults -> file -> env vars.

pub mod loader;
pub mod schema;

pub use loader::{
    load_config, validate, ConfigError, PREFIXED_LICENSE_ID_ENV, VALID_LICENSE_ID_ENV,
};
pub use schema::{LicensingConfig, LoggingConfig, ServerConfig, TaxprepConfig};
