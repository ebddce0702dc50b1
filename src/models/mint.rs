//! Mint status
//!
//! Exactly one of two states, selected solely by the certificate's
//! `minted` flag.

use serde::{Deserialize, Serialize};

/// Label shown when a certificate has been minted
pub const MINTED_LABEL: &str = "Minted on Blockchain";

/// Label shown when a certificate has not been minted
pub const NOT_MINTED_LABEL: &str = "Not Minted";

/// Whether a certificate was recorded on an immutable ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MintStatus {
    /// Recorded on chain
    Minted,
    /// Not (yet) recorded
    #[default]
    NotMinted,
}

impl MintStatus {
    /// Display label for this status
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minted => MINTED_LABEL,
            Self::NotMinted => NOT_MINTED_LABEL,
        }
    }

    /// Whether this is the minted state
    #[must_use]
    pub const fn is_minted(self) -> bool {
        matches!(self, Self::Minted)
    }
}

impl From<bool> for MintStatus {
    fn from(minted: bool) -> Self {
        if minted { Self::Minted } else { Self::NotMinted }
    }
}

impl std::fmt::Display for MintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minted => write!(f, "minted"),
            Self::NotMinted => write!(f, "not_minted"),
        }
    }
}

impl std::str::FromStr for MintStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minted" | "true" => Ok(Self::Minted),
            "not_minted" | "not-minted" | "false" => Ok(Self::NotMinted),
            _ => Err(format!("Invalid mint status: {s}. Use: minted, not_minted")),
        }
    }
}
