//! Certificate card view
//!
//! [`CertificateView::new`] is the whole rendering contract: a pure
//! function from a borrowed [`Certificate`] (plus card config) to a view
//! model. The two branches of the card are explicit enums, so the four
//! minted/action combinations can be matched exhaustively:
//!
//! - [`MintStatus`]: `Minted` or `NotMinted`
//! - [`CardAction`]: `ViewDetails` or `None`
//!
//! [`CertificateView::to_tree`] lays the view out with the design-system
//! primitives in [`node`]; the renderers in [`crate::render`] consume
//! either form.

mod icon;
pub mod node;

pub use icon::Icon;
pub use node::{BadgeVariant, ButtonVariant, Element, Node};

use serde::Serialize;

use crate::config::CardConfig;
use crate::models::{Certificate, MintStatus};

/// Label of the detail-view action
pub const VIEW_ACTION_LABEL: &str = "View Certificate";

/// Static card header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardHeading {
    /// Emblem icon
    pub icon: Icon,
    /// Brand text
    pub brand: String,
    /// Fixed title text
    pub title: String,
}

/// The optional action at the bottom of the card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardAction {
    /// Full-width link to the certificate detail view
    ViewDetails {
        /// Button label
        label: String,
        /// Navigation target
        href: String,
    },
    /// No action control at all
    None,
}

impl CardAction {
    /// Navigation target, if any
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        match self {
            Self::ViewDetails { href, .. } => Some(href),
            Self::None => None,
        }
    }
}

/// Everything a card displays, already resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateView {
    /// Branding header
    pub heading: CardHeading,
    /// Role label, verbatim
    pub role: String,
    /// Score badge text (`Score: {score}%`)
    pub score_label: String,
    /// Date text, verbatim
    pub date: String,
    /// Mint indicator state
    pub mint: MintStatus,
    /// Detail-view action
    pub action: CardAction,
}

impl CertificateView {
    /// Build the view for a certificate
    #[must_use]
    pub fn new(certificate: &Certificate, config: &CardConfig) -> Self {
        let action = certificate.detail_id().map_or(CardAction::None, |id| {
            CardAction::ViewDetails {
                label: VIEW_ACTION_LABEL.to_string(),
                href: config.detail_path(id),
            }
        });

        Self {
            heading: CardHeading {
                icon: Icon::Award,
                brand: config.brand.clone(),
                title: config.title.clone(),
            },
            role: certificate.role.clone(),
            score_label: certificate.score.badge_label(),
            date: certificate.date.to_string(),
            mint: certificate.mint_status(),
            action,
        }
    }

    /// Lay the view out as a design-system tree
    #[must_use]
    pub fn to_tree(&self) -> Node {
        let header = node::card_header("text-center space-y-4")
            .child(
                Element::new("div", "cert-emblem-wrap")
                    .child(Element::new("div", "cert-emblem").child(Node::icon(
                        self.heading.icon,
                        "w-10 h-10 text-white",
                    ))),
            )
            .child(
                Element::new("div", "")
                    .child(Element::new("h3", "cert-brand").child(Node::text(&self.heading.brand)))
                    .child(Element::new("p", "cert-title").child(Node::text(&self.heading.title))),
            );

        let mint = match self.mint {
            MintStatus::Minted => Element::new("div", "cert-mint cert-mint-minted")
                .child(Node::icon(Icon::CheckCircle, "w-4 h-4 text-success"))
                .child(Element::new("span", "text-sm text-success").child(Node::text(self.mint.label()))),
            MintStatus::NotMinted => Element::new("div", "cert-mint cert-mint-pending")
                .child(node::badge(BadgeVariant::Outline, "", self.mint.label())),
        };

        let action = match &self.action {
            CardAction::ViewDetails { label, href } => Some(
                node::link(href.as_str(), "block cert-action").child(
                    node::button(ButtonVariant::Outline, "w-full mt-2")
                        .child(Node::icon(Icon::Eye, "w-4 h-4 mr-2"))
                        .child(Node::text(label)),
                ),
            ),
            CardAction::None => None,
        };

        let content = node::card_content("space-y-3")
            .child(
                Element::new("div", "text-center")
                    .child(Element::new("p", "cert-role").child(Node::text(&self.role)))
                    .child(node::badge(BadgeVariant::Secondary, "mt-2", &self.score_label)),
            )
            .child(
                Element::new("div", "cert-date")
                    .child(Node::icon(Icon::Calendar, "w-4 h-4"))
                    .child(Node::text(&self.date)),
            )
            .child(mint)
            .child_opt(action);

        node::card("cert-card").child(header).child(content).into()
    }
}
