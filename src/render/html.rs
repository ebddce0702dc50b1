//! HTML rendering of the card tree

use std::fmt::Write as _;

use crate::view::{CertificateView, Element, Node};

/// Stylesheet for the card classes
pub const STYLE_CSS: &str = include_str!("style.css");

/// Elements that never have children or a closing tag
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// How a full page pulls in the card stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stylesheet {
    /// Embed [`STYLE_CSS`] in a `<style>` block
    #[default]
    Inline,
    /// Reference a stylesheet URL
    Linked(&'static str),
}

/// Renders card views as HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    stylesheet: Stylesheet,
}

impl HtmlRenderer {
    /// Renderer that inlines the stylesheet in full pages
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stylesheet: Stylesheet::Inline,
        }
    }

    /// Choose how pages reference the stylesheet
    #[must_use]
    pub const fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Render one card as an HTML fragment
    #[must_use]
    pub fn render_card(&self, view: &CertificateView) -> String {
        let mut out = String::new();
        write_node(&mut out, &view.to_tree());
        out
    }

    /// Render cards inside a complete HTML page
    #[must_use]
    pub fn render_page(&self, title: &str, views: &[CertificateView]) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"UTF-8\">\n");
        out.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        let _ = writeln!(out, "<title>{}</title>", escape_html(title));
        match self.stylesheet {
            Stylesheet::Inline => {
                let _ = writeln!(out, "<style>\n{STYLE_CSS}</style>");
            },
            Stylesheet::Linked(href) => {
                let _ = writeln!(out, "<link rel=\"stylesheet\" href=\"{}\">", escape_html(href));
            },
        }
        out.push_str("</head>\n<body>\n<main class=\"cert-grid\">\n");
        if views.is_empty() {
            out.push_str("<p class=\"empty\">No certificates</p>\n");
        }
        for view in views {
            out.push_str(&self.render_card(view));
            out.push('\n');
        }
        out.push_str("</main>\n</body>\n</html>\n");
        out
    }
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text { text } => out.push_str(&escape_html(text)),
        Node::Icon { icon, class } => {
            let _ = write!(
                out,
                "<svg class=\"icon icon-{name} {class}\" data-icon=\"{name}\" viewBox=\"0 0 24 24\" \
                 fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" \
                 stroke-linejoin=\"round\" aria-hidden=\"true\">{body}</svg>",
                name = icon.name(),
                class = escape_html(class),
                body = icon.svg_body(),
            );
        },
        Node::Element(el) => write_element(out, el),
    }
}

fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(el.tag);
    if !el.class.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape_html(&el.class));
    }
    for (name, value) in &el.attrs {
        let _ = write!(out, " {name}=\"{}\"", escape_html(value));
    }
    out.push('>');
    if VOID_TAGS.contains(&el.tag) {
        return;
    }
    for child in &el.children {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", el.tag);
}

/// Escape text for HTML content and double-quoted attributes
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
