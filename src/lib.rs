//! certview - Render SkillForge certificate cards
//!
//! The core is [`view::CertificateView::new`], a pure function from a
//! borrowed [`models::Certificate`] to a card view. Around it:
//!
//! - [`render`]: HTML and terminal renderers
//! - [`loader`]: reading certificate files (JSON or TOML)
//! - [`config`]: card branding and the detail route
//! - [`api`]: HTTP-agnostic handlers for preview servers
//! - [`output`]: human and JSON command output

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod config;
pub mod loader;
pub mod models;
pub mod output;
pub mod paths;
pub mod render;
pub mod view;
