//! Configuration merger for CLI arguments and config files
//!
//! CLI arguments override values loaded from configuration sources.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};

/// Merges CLI overrides into file/environment based configuration
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Create a merger by loading configuration for the given CLI
    ///
    /// `--config` switches the loader to single file mode and `--env`
    /// overrides `BRIDGE_APP_ENV`.
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = ConfigLoader::new()?;

        if let Some(env) = cli.env {
            loader = loader.with_environment(env.into());
        }

        // Readability was checked by the `--config` value parser
        if let Some(ref path) = cli.config {
            loader = loader.with_file(path);
        }

        Ok(Self::new(loader.load()?))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// Precedence, highest first: command-specific flags, global flags,
    /// loaded configuration.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        self.apply_global_overrides(&mut config, cli);

        if let Some(ref command) = cli.command {
            self.apply_command_overrides(&mut config, command);
        }

        config.validate()?;

        Ok(config)
    }

    fn apply_global_overrides(&self, config: &mut Settings, cli: &Cli) {
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(locale) = cli.locale {
            config.output.locale = locale;
        }
    }

    fn apply_command_overrides(&self, config: &mut Settings, command: &Commands) {
        match command {
            Commands::Send {
                log_level: Some(level),
                ..
            } => {
                config.logger.level = (*level).into();
            }
            Commands::Send { .. } | Commands::Run => {}
        }
    }

    /// Get the base configuration
    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::env_lock;
    use crate::models::Locale;
    use clap::Parser;
    use tempfile::tempdir;

    #[test]
    fn test_configuration_merger_new() {
        let base_config = Settings::default();
        let merger = ConfigurationMerger::new(base_config.clone());
        assert_eq!(merger.config(), &base_config);
    }

    #[test]
    fn test_no_flags_keeps_base() {
        let merger = ConfigurationMerger::new(Settings::default());
        let cli = Cli::try_parse_from(["notify-bridge"]).unwrap();
        assert_eq!(merger.merge_cli_args(&cli).unwrap(), Settings::default());
    }

    #[test]
    fn test_merge_verbose_flag() {
        let merger = ConfigurationMerger::new(Settings::default());
        let cli = Cli::try_parse_from(["notify-bridge", "--verbose"]).unwrap();
        assert_eq!(merger.merge_cli_args(&cli).unwrap().logger.level, "debug");
    }

    #[test]
    fn test_merge_quiet_flag() {
        let merger = ConfigurationMerger::new(Settings::default());
        let cli = Cli::try_parse_from(["notify-bridge", "--quiet"]).unwrap();
        assert_eq!(merger.merge_cli_args(&cli).unwrap().logger.level, "error");
    }

    #[test]
    fn test_merge_locale() {
        let merger = ConfigurationMerger::new(Settings::default());
        let cli = Cli::try_parse_from(["notify-bridge", "--locale", "ru"]).unwrap();
        assert_eq!(merger.merge_cli_args(&cli).unwrap().output.locale, Locale::Ru);
    }

    #[test]
    fn test_command_log_level_overrides_global() {
        let merger = ConfigurationMerger::new(Settings::default());
        let cli = Cli::try_parse_from([
            "notify-bridge",
            "--verbose",
            "send",
            "-k",
            "order",
            "-C",
            "email",
            "--log-level",
            "info",
            "hello",
        ])
        .unwrap();
        assert_eq!(merger.merge_cli_args(&cli).unwrap().logger.level, "info");
    }

    #[test]
    fn test_from_cli_with_config_file() {
        let _guard = env_lock();
        let dir = tempdir().unwrap();
        let path = dir.path().join("bridge.toml");
        std::fs::write(&path, "[output]\nlocale = \"ru\"\n\n[logger]\nlevel = \"info\"\n").unwrap();

        let cli =
            Cli::try_parse_from(["notify-bridge", "--config", path.to_str().unwrap()]).unwrap();
        let merger = ConfigurationMerger::from_cli(&cli).unwrap();

        assert_eq!(merger.config().output.locale, Locale::Ru);
        assert_eq!(merger.config().logger.level, "info");
    }

    #[test]
    fn test_cli_locale_beats_config_file() {
        let _guard = env_lock();
        let dir = tempdir().unwrap();
        let path = dir.path().join("bridge.toml");
        std::fs::write(&path, "[output]\nlocale = \"ru\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "notify-bridge",
            "--config",
            path.to_str().unwrap(),
            "--locale",
            "en",
        ])
        .unwrap();
        let merged = ConfigurationMerger::from_cli(&cli)
            .unwrap()
            .merge_cli_args(&cli)
            .unwrap();

        assert_eq!(merged.output.locale, Locale::En);
    }

    #[test]
    fn test_from_cli_missing_file_reported_by_loader() {
        let _guard = env_lock();
        let dir = tempdir().unwrap();
        let mut cli = Cli::try_parse_from(["notify-bridge"]).unwrap();
        // Deleted after parsing: the loader still refuses it
        cli.config = Some(dir.path().join("gone.toml"));

        assert!(matches!(
            ConfigurationMerger::from_cli(&cli),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_uppercase_locale_from_config_file() {
        let _guard = env_lock();
        let dir = tempdir().unwrap();
        let path = dir.path().join("bridge.toml");
        std::fs::write(&path, "[output]\nlocale = \"RU\"\n").unwrap();

        let cli =
            Cli::try_parse_from(["notify-bridge", "--config", path.to_str().unwrap()]).unwrap();
        let merger = ConfigurationMerger::from_cli(&cli).unwrap();

        assert_eq!(merger.config().output.locale, Locale::Ru);
    }
}
