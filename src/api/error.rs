//! Card API errors
//!
//! Every failure the card API can report, each with its HTTP status and a
//! stable wire code. Adapters only translate; they never pick statuses.

use serde::Serialize;
use thiserror::Error;

use crate::loader::LoadError;

/// Why a card request failed
#[derive(Debug, Error)]
pub enum ApiError {
    /// No loaded certificate carries this id
    #[error("Certificate '{0}' not found")]
    CertificateNotFound(String),

    /// Card lookup with an empty id
    #[error("Certificate id cannot be empty")]
    EmptyId,

    /// Request body or path could not be understood
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Nothing is served at this method and path
    #[error("Not found: {method} {path}")]
    UnknownRoute {
        /// Request method
        method: String,
        /// Request path, without the API prefix
        path: String,
    },

    /// The certificate source file could not be loaded
    #[error(transparent)]
    Source(#[from] LoadError),
}

impl ApiError {
    /// HTTP status code for this error
    ///
    /// A broken certificate file is the server's problem, not the
    /// client's, so every `Source` error is a 500.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::CertificateNotFound(_) | Self::UnknownRoute { .. } => 404,
            Self::EmptyId | Self::InvalidRequest(_) => 400,
            Self::Source(_) => 500,
        }
    }

    /// Wire code placed in the error envelope
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::CertificateNotFound(_) => "CERTIFICATE_NOT_FOUND",
            Self::EmptyId => "EMPTY_ID",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::UnknownRoute { .. } => "NOT_FOUND",
            Self::Source(LoadError::Io { .. }) => "SOURCE_UNREADABLE",
            Self::Source(_) => "SOURCE_INVALID",
        }
    }
}

/// Serializable error data for JSON responses
#[derive(Debug, Serialize)]
pub struct ApiErrorData {
    /// Wire code, see [`ApiError::code`]
    pub code: &'static str,
    /// Human-readable message
    pub message: String,
}

impl From<&ApiError> for ApiErrorData {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}
