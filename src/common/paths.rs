//! Configuration file paths
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `~/.config/gstc/`
//! - macOS: `~/Library/Application Support/gstc/`
//! - Windows: `%APPDATA%\gstc\`

use std::path::PathBuf;

/// Name used for the project directories
const APP_NAME: &str = "gstc";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
