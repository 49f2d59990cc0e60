//! `taxprep config` command.
//!
//! Prints the configuration after defaults, file and environment have
//! been merged.

use clap::Args;

use taxprep_config::TaxprepConfig;

use crate::output;

/// Print or check the effective configuration.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Only report whether the configuration loads.
    #[arg(long)]
    pub check: bool,
}

/// Executes the config command.
pub fn execute(args: &ConfigArgs, config: &TaxprepConfig) -> anyhow::Result<()> {
    if args.check {
        output::print_success(&format!(
            "configuration valid (listening on {})",
            config.server.addr()
        ));
        return Ok(());
    }
    output::print_json(config)
}
