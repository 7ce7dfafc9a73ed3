use thiserror::Error;

use crate::config::error::ConfigError;

/// Application-wide error type for the notification bridge.
///
/// Rendering and dispatch are total; the variants below cover the ambient
/// surfaces around them (the output stream, configuration, CLI input).
#[derive(Error, Debug)]
pub enum AppError {
    /// Writing a line to the console sink failed
    #[error("Output error: {message}")]
    Output {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Output failure caused by an I/O error
    pub fn output(message: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Output {
            message: message.into(),
            source: Some(source),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let key = match &error {
            ConfigError::ValidationError { field, .. } => field.clone(),
            ConfigError::FileNotFound(_) => "config_file".to_string(),
            ConfigError::EnvVarError(_) => "environment".to_string(),
            ConfigError::MutualExclusivityError(_) => "config_source".to_string(),
            ConfigError::ParseError(_) | ConfigError::Other(_) => "settings".to_string(),
        };

        AppError::Configuration {
            key,
            source: error.into(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_output_error_keeps_io_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = AppError::output("stdout", io);
        assert_eq!(err.to_string(), "Output error: stdout");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_validation_error_display() {
        let err = AppError::Validation {
            field: "message".to_string(),
            reason: "too long".to_string(),
        };
        assert_eq!(err.to_string(), "Validation failed for message: too long");
    }

    #[test]
    fn test_from_anyhow_is_internal() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_config_error_keeps_failing_field() {
        let err: AppError = ConfigError::validation("logger.level", "Invalid log level").into();
        match &err {
            AppError::Configuration { key, .. } => assert_eq!(key, "logger.level"),
            other => panic!("Expected configuration error, got {:?}", other),
        }
        assert_eq!(err.to_string(), "Configuration error: logger.level");
        assert!(err.source().unwrap().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_env_var_error_maps_to_environment_key() {
        let err: AppError = ConfigError::EnvVarError("bad".to_string()).into();
        assert!(matches!(err, AppError::Configuration { ref key, .. } if key == "environment"));
    }
}
