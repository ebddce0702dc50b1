//! Output formatting for human and JSON modes
//!
//! Every command builds one of these results and renders it either as
//! human-readable output (HTML or a terminal card) or as JSON.

use serde::Serialize;

use crate::config::CertviewConfig;
use crate::render::TextRenderer;
use crate::view::CertificateView;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of the `show` command
#[derive(Debug, Serialize)]
pub struct ShowResult {
    /// Card views, in input order
    pub cards: Vec<CertificateView>,
    /// Whether human output uses colour
    #[serde(skip)]
    pub color: bool,
}

/// A card rendered to HTML
#[derive(Debug, Serialize)]
pub struct RenderedCard {
    /// Certificate id, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Card view
    pub view: CertificateView,
    /// Card HTML fragment
    pub html: String,
}

/// Result of the `render` command
#[derive(Debug, Serialize)]
pub struct RenderResult {
    /// Rendered cards
    pub cards: Vec<RenderedCard>,
    /// Page or fragment HTML printed in human mode
    #[serde(skip)]
    pub output: String,
}

/// Result of the `config` command
#[derive(Debug, Serialize)]
pub struct ConfigResult {
    /// Config file location
    pub path: String,
    /// Whether the file exists
    pub exists: bool,
    /// Effective configuration
    pub config: CertviewConfig,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl ShowResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.cards.is_empty() {
            println!("No certificates found.");
            return;
        }
        println!("{}", TextRenderer::new(self.color).render_all(&self.cards));
    }
}

impl RenderResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.output),
            OutputMode::Json => render_json(self),
        }
    }
}

impl ConfigResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let state = if self.exists { "" } else { " (not found, using defaults)" };
                println!("# {}{state}", self.path);
                println!("{}", self.config.to_toml().unwrap_or_default());
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
