//! CLI module for notify-bridge
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files + environment)
//! - Command execution and validation
//! - Command handlers for the run and send operations

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

// Re-export public types for convenience
pub use config_merger::ConfigurationMerger;
pub use executor::{execute_command, execute_command_with_output};
pub use parser::{Cli, Commands, Environment, LogLevel};

use anyhow::Context;

use crate::config::settings::Settings;
use crate::error::AppError;
use crate::logger::init_logger;

/// Load and merge configuration from CLI arguments
///
/// 1. Load configuration from files and `BRIDGE_*` variables
/// 2. Merge CLI argument overrides
/// 3. Validate the final configuration
///
/// # Errors
/// Returns error if configuration loading, merging, or validation fails
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<Settings> {
    let merger = ConfigurationMerger::from_cli(cli).map_err(AppError::from)?;
    let settings = merger.merge_cli_args(cli).map_err(AppError::from)?;

    Ok(settings)
}

/// Initialize logger from settings
///
/// # Errors
/// Returns error if logger initialization fails
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    let logger_config = settings
        .logger
        .clone()
        .into_logger_config()
        .context("Logger configuration error")?;

    init_logger(logger_config).context("Logger initialization error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::env_lock;
    use clap::Parser;

    #[test]
    fn test_invalid_environment_aborts_loading() {
        let _guard = env_lock();
        let previous = std::env::var(crate::config::Environment::ENV_VAR).ok();
        unsafe {
            std::env::set_var(crate::config::Environment::ENV_VAR, "qa");
        }

        let cli = Cli::try_parse_from(["notify-bridge"]).unwrap();
        let result = load_and_merge_config(&cli);

        unsafe {
            match previous {
                Some(value) => std::env::set_var(crate::config::Environment::ENV_VAR, value),
                None => std::env::remove_var(crate::config::Environment::ENV_VAR),
            }
        }

        let err = result.unwrap_err();
        match err.downcast_ref::<AppError>() {
            Some(AppError::Configuration { key, .. }) => assert_eq!(key, "environment"),
            other => panic!("Expected configuration error, got {:?}", other),
        }
    }
}
