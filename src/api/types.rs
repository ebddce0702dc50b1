//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiErrorData};
use crate::models::Certificate;
use crate::view::CertificateView;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(err: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData::from(err)),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for rendering an ad-hoc certificate
#[derive(Debug, Deserialize)]
pub struct RenderCardRequest {
    /// Certificate to render
    pub certificate: Certificate,
    /// Return the bare card instead of a full HTML document
    #[serde(default)]
    pub fragment: bool,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// One rendered card
#[derive(Debug, Clone, Serialize)]
pub struct CardData {
    /// Certificate id, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Card HTML, a fragment or a full document
    pub html: String,
    /// Card view model
    pub view: CertificateView,
}

/// All loaded cards
#[derive(Debug, Serialize)]
pub struct CardsData {
    /// Rendered cards, in load order
    pub cards: Vec<CardData>,
    /// Number of cards
    pub total: usize,
    /// Number of minted certificates
    pub minted: usize,
}
