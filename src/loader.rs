//! Certificate file loading
//!
//! Certificates come from whoever produced them; this module only reads
//! them. The format is picked by extension: `.toml` is TOML, everything
//! else is JSON. Both accept a single certificate or a list.
//!
//! ```toml
//! [[certificates]]
//! id = "cert-42"
//! role = "Data Analyst"
//! score = 78
//! date = "2024-01-15"
//! minted = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::Certificate;

/// Errors raised while loading certificates
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Invalid JSON certificate data
    #[error("invalid certificate JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid TOML certificate data
    #[error("invalid certificate TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// `{ "certificates": [...] }` / `[[certificates]]` documents
#[derive(Deserialize)]
struct Wrapped {
    certificates: Vec<Certificate>,
}

/// Load all certificates from a file
pub fn load_file(path: &Path) -> Result<Vec<Certificate>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let certs = if is_toml { parse_toml(&content)? } else { parse_json(&content)? };

    log::debug!("Loaded {} certificate(s) from {}", certs.len(), path.display());
    Ok(certs)
}

/// Parse certificates from JSON text
///
/// The shape is picked from the top-level value, then the text is parsed
/// again as that shape so errors keep their line and column.
pub fn parse_json(content: &str) -> Result<Vec<Certificate>, LoadError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let certs = match value {
        serde_json::Value::Array(_) => serde_json::from_str(content)?,
        serde_json::Value::Object(map) if map.contains_key("certificates") => {
            serde_json::from_str::<Wrapped>(content)?.certificates
        },
        _ => vec![serde_json::from_str::<Certificate>(content)?],
    };
    Ok(certs)
}

/// Parse certificates from TOML text
pub fn parse_toml(content: &str) -> Result<Vec<Certificate>, LoadError> {
    let table: toml::Table = toml::from_str(content)?;
    if table.contains_key("certificates") {
        Ok(toml::from_str::<Wrapped>(content)?.certificates)
    } else {
        Ok(vec![toml::from_str::<Certificate>(content)?])
    }
}

/// Find a certificate by id
#[must_use]
pub fn find<'a>(certs: &'a [Certificate], id: &str) -> Option<&'a Certificate> {
    if id.is_empty() {
        return None;
    }
    certs.iter().find(|c| c.detail_id() == Some(id))
}
