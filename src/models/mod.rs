//! Data models for certview
//!
//! Core abstractions:
//! - Certificate: a completed-assessment credential handed to the renderer
//! - Score: the percentage shown on the card, kept exactly as supplied
//! - Scalar: any scalar value (the score and the date), displayed as given
//! - `MintStatus`: whether the certificate was recorded on a ledger

pub mod certificate;
pub mod mint;
pub mod scalar;
pub mod score;

pub use certificate::Certificate;
pub use mint::MintStatus;
pub use scalar::Scalar;
pub use score::Score;
