//! CLI argument validation functions
//!
//! Value parsers for arguments clap cannot validate by type alone.

use std::fs;
use std::path::PathBuf;

use crate::models::Locale;

/// Validate that a configuration file path exists and is readable
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    if path_str.trim().is_empty() {
        return Err("Configuration file path cannot be empty".to_string());
    }

    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!(
            "Cannot read configuration file '{}': {}",
            path_str, e
        )),
    }
}

/// Parse `--locale` with the same rule configuration values use
pub fn parse_locale(value: &str) -> Result<Locale, String> {
    value.parse().map_err(|e: crate::error::AppError| e.to_string())
}
