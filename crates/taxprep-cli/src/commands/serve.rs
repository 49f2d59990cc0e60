//! `taxprep serve` command.
//!
//! Starts the HTTP API using the merged configuration, with optional
//! command-line overrides for the listener.

use std::net::IpAddr;

use clap::Args;

use taxprep_config::TaxprepConfig;
use taxprep_transport_http::{AppState, HttpServer};

/// Start the HTTP API server.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides `server.host`).
    #[arg(long)]
    pub host: Option<IpAddr>,
    /// TCP port to listen on (overrides `server.port`).
    #[arg(long)]
    pub port: Option<u16>,
    /// Route prefix such as "/api" (overrides `server.api_prefix`).
    #[arg(long)]
    pub api_prefix: Option<String>,
}

impl ServeArgs {
    /// Applies command-line overrides on top of the loaded configuration.
    fn apply(&self, config: &mut TaxprepConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(prefix) = &self.api_prefix {
            config.server.api_prefix = prefix.clone();
        }
    }
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, mut config: TaxprepConfig) -> anyhow::Result<()> {
    args.apply(&mut config);
    taxprep_config::validate(&config)?;

    let state = AppState::new(
        config.licensing.valid_license_id.as_str(),
        config.server.api_prefix.as_str(),
    );
    let server = HttpServer::new(config.server.addr(), state);

    server
        .run_until(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("server error: {e}"))?;

    Ok(())
}

/// Resolves on ctrl-c; in-flight requests are drained afterwards.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
