//! Configuration schema types.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use taxprep_types::DEFAULT_VALID_LICENSE_ID;

/// Top-level taxprep configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaxprepConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// License verification settings.
    #[serde(default)]
    pub licensing: LicensingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: IpAddr,
    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path prefix for every route except `/health` (e.g. "/api").
    #[serde(default)]
    pub api_prefix: String,
}

impl ServerConfig {
    /// Returns the socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_prefix: String::new(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}
fn default_port() -> u16 {
    8000
}

/// License verification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicensingConfig {
    /// The only license id `POST /licenses/verify` accepts.
    #[serde(default = "default_valid_license_id")]
    pub valid_license_id: String,
}

impl Default for LicensingConfig {
    fn default() -> Self {
        Self {
            valid_license_id: default_valid_license_id(),
        }
    }
}

fn default_valid_license_id() -> String {
    DEFAULT_VALID_LICENSE_ID.to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "taxprep=trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
