//! Locations of the files the arcade keeps between sessions.

use crate::constants::{CONFIG_FILE_NAME, DATA_DIR_NAME, LOG_FILE_NAME};
use std::io;
use std::path::PathBuf;

/// Get the data directory (~/.arcade).
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(DATA_DIR_NAME))
}

/// Get the optional config file path (~/.arcade/config.json).
pub fn config_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join(CONFIG_FILE_NAME))
}

/// Get the log file path (~/.arcade/arcade.log).
pub fn log_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join(LOG_FILE_NAME))
}
