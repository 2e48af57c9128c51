//! Platform configuration paths

use std::path::PathBuf;

/// Application name used for platform directories
const APP_NAME: &str = "fibonacci";

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/fibonacci/`
/// - macOS: `~/Library/Application Support/fibonacci/`
/// - Windows: `%APPDATA%\fibonacci\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
