//! Design-system node tree
//!
//! A small element tree built from the card primitives (card, header,
//! content, badge, button, link). Renderers walk it; nothing here knows
//! about certificates.

use serde::Serialize;

use super::Icon;

/// Badge style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Filled, low-emphasis badge
    Secondary,
    /// Bordered badge with no fill
    Outline,
}

/// Button style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Bordered button with no fill
    Outline,
}

impl BadgeVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Secondary => "badge badge-secondary",
            Self::Outline => "badge badge-outline",
        }
    }
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Outline => "btn btn-outline",
        }
    }
}

/// A node in the rendered tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// An element with children
    Element(Element),
    /// Plain text, escaped by the renderer
    Text {
        /// The text content
        text: String,
    },
    /// An icon with extra classes
    Icon {
        /// Which icon
        icon: Icon,
        /// Size/colour classes
        class: String,
    },
}

/// An element node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Tag name
    pub tag: &'static str,
    /// Space-separated classes
    pub class: String,
    /// Extra attributes, in insertion order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(&'static str, String)>,
    /// Child nodes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    /// New element with a class list
    #[must_use]
    pub fn new(tag: &'static str, class: impl Into<String>) -> Self {
        Self {
            tag,
            class: class.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Append a child
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append an optional child
    #[must_use]
    pub fn child_opt(self, node: Option<impl Into<Node>>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }

    /// Value of an attribute
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl Node {
    /// A text node
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// An icon node
    #[must_use]
    pub fn icon(icon: Icon, class: impl Into<String>) -> Self {
        Self::Icon {
            icon,
            class: class.into(),
        }
    }

    /// Concatenated text of this node and its descendants
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text { text } => out.push_str(text),
            Self::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            Self::Icon { .. } => {},
        }
    }

    /// Depth-first search for the first element matching `pred`
    #[must_use]
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        match self {
            Self::Element(el) if pred(el) => Some(el),
            Self::Element(el) => el.children.iter().find_map(|c| c.find(pred)),
            _ => None,
        }
    }
}

// =============================================================================
// Primitives
// =============================================================================

/// Card container
#[must_use]
pub fn card(class: &str) -> Element {
    Element::new("div", join_class("card", class))
}

/// Card header section
#[must_use]
pub fn card_header(class: &str) -> Element {
    Element::new("div", join_class("card-header", class))
}

/// Card content section
#[must_use]
pub fn card_content(class: &str) -> Element {
    Element::new("div", join_class("card-content", class))
}

/// Badge with a text label
#[must_use]
pub fn badge(variant: BadgeVariant, class: &str, label: impl Into<String>) -> Element {
    Element::new("span", join_class(variant.class(), class)).child(Node::text(label))
}

/// Button element
#[must_use]
pub fn button(variant: ButtonVariant, class: &str) -> Element {
    Element::new("button", join_class(variant.class(), class)).attr("type", "button")
}

/// Client-side navigation link
#[must_use]
pub fn link(href: impl Into<String>, class: &str) -> Element {
    Element::new("a", class).attr("href", href)
}

fn join_class(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}
