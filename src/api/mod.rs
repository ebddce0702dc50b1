//! HTTP-agnostic API layer
//!
//! Typed request/response structures and pure handlers that any HTTP
//! server implementation (`tiny_http`, axum, etc.) can call.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take typed input, return data or `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData};
pub use handlers::{get_card, list_cards, render_card};
pub use types::{ApiResponse, CardData, CardsData, RenderCardRequest};
