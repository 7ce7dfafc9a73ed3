//! Command executor for dispatching CLI commands
//!
//! Entry point for executing CLI commands after parsing and configuration
//! loading.

use super::handlers::{RunCommandHandler, SendCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::services::notifications::ConsoleOutput;

/// Execute a CLI command, writing notification lines to stdout
///
/// # Errors
/// Returns validation errors for bad argument combinations and output
/// errors if stdout cannot be written.
pub fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    execute_command_with_output(cli, settings, ConsoleOutput::stdout())
}

/// Execute a CLI command against an explicit console sink
pub fn execute_command_with_output(
    cli: &Cli,
    settings: Settings,
    output: ConsoleOutput,
) -> AppResult<()> {
    validate_command_args(cli)?;

    match cli.command_or_default() {
        Commands::Run => {
            RunCommandHandler::new(settings, output).execute()?;
        }
        Commands::Send {
            kind,
            channel,
            format,
            message,
            log_level: _,
        } => {
            SendCommandHandler::new(settings, output).execute(
                kind.into(),
                channel.into(),
                &message,
                format.into(),
            )?;
        }
    }

    Ok(())
}

/// Validate command arguments before execution
fn validate_command_args(cli: &Cli) -> AppResult<()> {
    cli.validate().map_err(|reason| AppError::Validation {
        field: "cli_arguments".to_string(),
        reason,
    })
}
