//! Certificate model
//!
//! A certificate is owned by whoever produced it (a list view, a detail
//! page, a file on disk). The renderer only ever borrows it.

use serde::{Deserialize, Serialize};

use super::{MintStatus, Scalar, Score};

/// A completed-assessment credential
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Certificate {
    /// Optional unique identifier; controls the detail-view action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The credentialed role or title (e.g., "Backend Engineer")
    pub role: String,

    /// Percentage score, displayed as given
    pub score: Score,

    /// Pre-formatted display date, never parsed
    pub date: Scalar,

    /// Whether the certificate was recorded on a ledger
    #[serde(default)]
    pub minted: bool,
}

impl Certificate {
    /// Create a certificate without an identifier
    #[must_use]
    pub fn new(
        role: impl Into<String>,
        score: impl Into<Score>,
        date: impl Into<Scalar>,
        minted: bool,
    ) -> Self {
        Self {
            id: None,
            role: role.into(),
            score: score.into(),
            date: date.into(),
            minted,
        }
    }

    /// Attach an identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The identifier, if present and non-empty
    ///
    /// An empty string counts as absent, the same as a missing field.
    #[must_use]
    pub fn detail_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Mint status derived from the `minted` flag
    #[must_use]
    pub fn mint_status(&self) -> MintStatus {
        MintStatus::from(self.minted)
    }
}
