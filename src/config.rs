//! Configuration management
//!
//! Card branding and the detail-view base path live here so every card
//! variant reads them from one place. Config is stored at
//! `~/.certview/config.toml` unless `$CERTVIEW_CONFIG` points elsewhere.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Brand shown in every card header
pub const DEFAULT_BRAND: &str = "SkillForge";

/// Fixed card title shown under the brand
pub const DEFAULT_TITLE: &str = "Certificate of Achievement";

/// Route prefix of the certificate detail view
pub const DEFAULT_DETAIL_BASE_PATH: &str = "/dashboard/certificates/view";

/// Default port of the preview server
pub const DEFAULT_PORT: u16 = 8787;

/// Errors raised while reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("failed to access config file {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid config TOML
    #[error("invalid config file {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
    /// The config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level certview configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertviewConfig {
    /// Card branding and navigation
    #[serde(default)]
    pub card: CardConfig,
    /// Preview server preferences
    #[serde(default)]
    pub ui: UiConfig,
}

/// Static card text and the detail route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Brand shown in the header
    #[serde(default = "default_brand")]
    pub brand: String,
    /// Title shown under the brand
    #[serde(default = "default_title")]
    pub title: String,
    /// Prefix the certificate id is appended to
    #[serde(default = "default_detail_base_path")]
    pub detail_base_path: String,
}

fn default_brand() -> String {
    DEFAULT_BRAND.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_detail_base_path() -> String {
    DEFAULT_DETAIL_BASE_PATH.to_string()
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            title: default_title(),
            detail_base_path: default_detail_base_path(),
        }
    }
}

impl CardConfig {
    /// Detail-view path for a certificate id: `{detail_base_path}/{id}`
    ///
    /// The id is appended as-is; trailing slashes on the base are dropped
    /// so the result never contains `//`.
    #[must_use]
    pub fn detail_path(&self, id: &str) -> String {
        format!("{}/{id}", self.detail_base_path.trim_end_matches('/'))
    }

    /// Strip the detail prefix from a request path, returning the decoded id
    ///
    /// The segment is percent-decoded, so `cert%2042` yields `cert 42`.
    /// Segments that decode to invalid UTF-8 are rejected.
    #[must_use]
    pub fn detail_id_from_path(&self, path: &str) -> Option<String> {
        let base = self.detail_base_path.trim_end_matches('/');
        let segment = path
            .strip_prefix(base)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|id| !id.is_empty() && !id.contains('/'))?;
        decode_segment(segment)
    }
}

/// Percent-decode one path segment
#[must_use]
pub fn decode_segment(segment: &str) -> Option<String> {
    percent_encoding::percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(std::borrow::Cow::into_owned)
}

/// Preview server preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Port the preview server binds to
    #[serde(default = "default_port")]
    pub port: u16,
    /// Theme preference
    #[serde(default = "default_theme")]
    pub theme: String,
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_theme() -> String {
    "light".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            theme: default_theme(),
        }
    }
}

impl CertviewConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, falling back to defaults
    ///
    /// A missing file is normal. An unreadable or malformed one is logged
    /// and ignored.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            },
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path();
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let content = self.to_toml()?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize as pretty TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
