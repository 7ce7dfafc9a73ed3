use clap::Parser;

use notify_bridge::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_and_merge_config(&cli)?;
    init_logger_from_settings(&settings)?;

    tracing::info!(
        version = notify_bridge::pkg_version(),
        locale = %settings.output.locale,
        "Starting {}",
        settings.application.name
    );

    execute_command(&cli, settings)?;

    Ok(())
}
