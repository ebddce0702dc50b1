//! Centralized path definitions for certview
//!
//! ```text
//! ~/.certview/
//! └── config.toml               # Card branding, detail path, UI settings
//! ```
//!
//! `$CERTVIEW_CONFIG` overrides the config file location entirely.

use std::path::PathBuf;

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV: &str = "CERTVIEW_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = ".certview";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global certview directory.
///
/// Returns `~/.certview/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the config file path.
///
/// Returns `$CERTVIEW_CONFIG` when set and non-empty, otherwise
/// `~/.certview/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => global_config_dir().join(GLOBAL_CONFIG_FILE),
    }
}
