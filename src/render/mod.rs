//! Card renderers
//!
//! Both renderers are pure: the same view always produces the same bytes.
//!
//! - [`HtmlRenderer`]: card fragment or standalone HTML page
//! - [`TextRenderer`]: boxed terminal card, optionally coloured

mod html;
mod text;

pub use html::{HtmlRenderer, STYLE_CSS, Stylesheet, escape_html};
pub use text::TextRenderer;
