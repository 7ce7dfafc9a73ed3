//! Configuration loader for notify-bridge
//!
//! `ConfigLoader` stacks the configuration sources with proper precedence
//! and deserializes the result into `Settings`.

use std::path::{Path, PathBuf};

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "BRIDGE_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "BRIDGE_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "BRIDGE";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// Sources, lowest priority first:
/// 1. `default.toml`
/// 2. `{environment}.toml`
/// 3. `local.toml`
/// 4. `BRIDGE_*` environment variables
///
/// When a single configuration file is set, it replaces layers 1-3.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Current application environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader from the process environment
    ///
    /// Reads `BRIDGE_CONFIG_DIR`, `BRIDGE_CONFIG_FILE` and `BRIDGE_APP_ENV`.
    ///
    /// # Errors
    ///
    /// Returns an error if both `BRIDGE_CONFIG_DIR` and `BRIDGE_CONFIG_FILE`
    /// are set, as they are mutually exclusive, or if `BRIDGE_APP_ENV` names
    /// an unknown environment.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from);
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_dir.is_some() && config_file.is_some() {
            return Err(ConfigError::mutual_exclusivity(
                "BRIDGE_CONFIG_DIR and BRIDGE_CONFIG_FILE cannot both be set. \
                 Use BRIDGE_CONFIG_DIR for layered configuration or \
                 BRIDGE_CONFIG_FILE for a single configuration file.",
            ));
        }

        Ok(Self {
            config_dir: config_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment: AppEnvironment::from_env()?,
        })
    }

    /// Create a loader with explicit sources, ignoring `BRIDGE_CONFIG_*`
    pub fn from_parts(
        config_dir: impl Into<PathBuf>,
        config_file: Option<PathBuf>,
        environment: AppEnvironment,
    ) -> Self {
        Self {
            config_dir: config_dir.into(),
            config_file,
            environment,
        }
    }

    /// Use a single configuration file instead of the layered directory
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Override the application environment
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Get the current application environment
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Get the configuration directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - an explicitly set configuration file does not exist
    /// - configuration parsing fails
    /// - configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        tracing::debug!(
            environment = %self.environment,
            config_dir = %self.config_dir.display(),
            config_file = ?self.config_file,
            "Configuration loaded"
        );

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match self.config_file {
            Some(ref config_file) => Self::add_file_source(builder, config_file, true)?,
            None => self.build_layered_config(builder)?,
        };

        // Environment variables always win:
        // BRIDGE_OUTPUT__LOCALE -> output.locale
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    /// Build layered configuration from the configuration directory
    fn build_layered_config(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let builder = Self::add_file_source(builder, &self.config_dir.join("default.toml"), false)?;

        let env_path = self.config_dir.join(self.environment.config_file_name());
        let builder = Self::add_file_source(builder, &env_path, false)?;

        Self::add_file_source(builder, &self.config_dir.join("local.toml"), false)
    }

    /// Add a TOML file source to the config builder
    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        let path_str = path.to_str().ok_or_else(|| {
            ConfigError::validation("config_file", "Configuration path is not valid UTF-8")
        })?;

        Ok(builder.add_source(File::new(path_str, FileFormat::Toml).required(required)))
    }

    /// Add environment variable source to the config builder
    ///
    /// Double underscores (`__`) separate nested keys:
    /// - `BRIDGE_OUTPUT__LOCALE` -> `output.locale`
    /// - `BRIDGE_LOGGER__LEVEL` -> `logger.level`
    fn add_env_source(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}

/// Serializes tests that read or write `BRIDGE_*` variables
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
    ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Locale;
    use std::fs;
    use tempfile::TempDir;

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Restores environment variables on drop
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    #[test]
    fn test_empty_directory_yields_defaults() {
        let _guard = env_lock();
        let temp_dir = setup_config_dir(&[]);
        let loader =
            ConfigLoader::from_parts(temp_dir.path(), None, AppEnvironment::Development);

        let settings = loader.load().expect("Defaults should load");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_layers_apply_in_order() {
        let _guard = env_lock();
        let temp_dir = setup_config_dir(&[
            (
                "default.toml",
                "[output]\nlocale = \"en\"\n\n[logger]\nlevel = \"info\"\n",
            ),
            ("production.toml", "[output]\nlocale = \"ru\"\n"),
            ("local.toml", "[logger]\nlevel = \"error\"\n"),
        ]);
        let loader =
            ConfigLoader::from_parts(temp_dir.path(), None, AppEnvironment::Production);

        let settings = loader.load().unwrap();
        assert_eq!(settings.output.locale, Locale::Ru);
        assert_eq!(settings.logger.level, "error");
    }

    #[test]
    fn test_other_environment_file_is_ignored() {
        let _guard = env_lock();
        let temp_dir = setup_config_dir(&[("production.toml", "[output]\nlocale = \"ru\"\n")]);
        let loader = ConfigLoader::from_parts(temp_dir.path(), None, AppEnvironment::Test);

        assert_eq!(loader.load().unwrap().output.locale, Locale::En);
    }

    #[test]
    fn test_single_file_mode() {
        let _guard = env_lock();
        let temp_dir = setup_config_dir(&[
            ("default.toml", "[output]\nlocale = \"ru\"\n"),
            ("custom.toml", "[application]\nname = \"custom\"\n"),
        ]);
        let loader = ConfigLoader::from_parts(temp_dir.path(), None, AppEnvironment::Development)
            .with_file(temp_dir.path().join("custom.toml"));

        let settings = loader.load().unwrap();
        assert_eq!(settings.application.name, "custom");
        // default.toml is not consulted in single file mode
        assert_eq!(settings.output.locale, Locale::En);
    }

    #[test]
    fn test_missing_single_file() {
        let _guard = env_lock();
        let temp_dir = setup_config_dir(&[]);
        let loader = ConfigLoader::from_parts(temp_dir.path(), None, AppEnvironment::Development)
            .with_file(temp_dir.path().join("missing.toml"));

        assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let _guard = env_lock();
        let temp_dir = setup_config_dir(&[("default.toml", "[logger]\nlevel = \"loud\"\n")]);
        let loader =
            ConfigLoader::from_parts(temp_dir.path(), None, AppEnvironment::Development);

        assert!(matches!(
            loader.load(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let _guard = env_lock();
        let temp_dir = setup_config_dir(&[("default.toml", "[output\nlocale = ")]);
        let loader =
            ConfigLoader::from_parts(temp_dir.path(), None, AppEnvironment::Development);

        assert!(loader.load().is_err());
    }

    #[test]
    fn test_new_reads_config_dir_and_environment() {
        let _guard = env_lock();
        let mut env = EnvGuard::new();

        env.remove(CONFIG_FILE_ENV);
        env.set(CONFIG_DIR_ENV, "/custom/config");
        env.set(AppEnvironment::ENV_VAR, "staging");

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.config_dir(), Path::new("/custom/config"));
        assert_eq!(loader.environment(), AppEnvironment::Staging);
        assert!(loader.config_file.is_none());
    }

    #[test]
    fn test_new_mutual_exclusivity_error() {
        let _guard = env_lock();
        let mut env = EnvGuard::new();

        env.set(CONFIG_DIR_ENV, "/custom/config");
        env.set(CONFIG_FILE_ENV, "/path/to/config.toml");

        match ConfigLoader::new() {
            Err(ConfigError::MutualExclusivityError(msg)) => {
                assert!(msg.contains(CONFIG_DIR_ENV));
                assert!(msg.contains(CONFIG_FILE_ENV));
            }
            other => panic!("Expected MutualExclusivityError, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_unknown_environment() {
        let _guard = env_lock();
        let mut env = EnvGuard::new();

        env.remove(CONFIG_DIR_ENV);
        env.remove(CONFIG_FILE_ENV);
        env.set(AppEnvironment::ENV_VAR, "qa");

        match ConfigLoader::new() {
            Err(ConfigError::EnvVarError(msg)) => assert!(msg.contains("qa")),
            other => panic!("Expected EnvVarError, got {:?}", other),
        }
    }

    #[test]
    fn test_new_defaults_to_development_when_unset() {
        let _guard = env_lock();
        let mut env = EnvGuard::new();

        env.remove(CONFIG_DIR_ENV);
        env.remove(CONFIG_FILE_ENV);
        env.remove(AppEnvironment::ENV_VAR);

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.environment(), AppEnvironment::Development);
        assert_eq!(loader.config_dir(), Path::new(DEFAULT_CONFIG_DIR));
    }

    #[test]
    fn test_env_override_wins_over_files() {
        let _guard = env_lock();
        let mut env = EnvGuard::new();

        let temp_dir = setup_config_dir(&[("default.toml", "[application]\nname = \"from-file\"\n")]);
        env.set("BRIDGE_APPLICATION__NAME", "from-env");

        let loader =
            ConfigLoader::from_parts(temp_dir.path(), None, AppEnvironment::Development);
        assert_eq!(loader.load().unwrap().application.name, "from-env");
    }
}
