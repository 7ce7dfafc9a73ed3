//! Log file opening.

use super::config::FileConfig;
use super::error::LoggerError;
use std::fs::{self, File, OpenOptions};
use std::sync::Mutex;

/// Opens the configured log file, creating parent directories as needed
///
/// The returned `Mutex<File>` is directly usable as a `MakeWriter`.
pub(crate) fn open_log_file(config: &FileConfig) -> Result<Mutex<File>, LoggerError> {
    if config.path.as_os_str().is_empty() {
        return Err(LoggerError::config("Log file path cannot be empty"));
    }

    if let Some(parent) = config.path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut options = OpenOptions::new();
    options.create(true);
    if config.append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    Ok(Mutex::new(options.open(&config.path)?))
}
