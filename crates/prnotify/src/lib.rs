//! CLI module.

use anyhow::Result;
use args::{Args, CommandExecutor};
use clap::Parser;
use prnotify_config::Config;
use prnotify_logging::configure_logging;
use tracing::info;

pub(crate) mod args;
mod config_validator;
mod event;
mod reporting;
#[cfg(test)]
mod testutils;

pub use reporting::failure_command;

/// Get version data.
pub fn get_version_data() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Initialize command line.
pub fn initialize_command_line() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    let config = args.apply_to(Config::from_env(env!("CARGO_PKG_VERSION").to_string())?);
    configure_logging(&config)?;
    config_validator::validate_configuration(&config)?;

    info!("{}", get_version_data());

    CommandExecutor::run(config)
}
