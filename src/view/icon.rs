//! Icons used by the certificate card
//!
//! Icons are declared by name; each renderer decides how to draw them.

use serde::{Deserialize, Serialize};

/// An icon from the card's icon set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Achievement emblem in the header
    Award,
    /// Next to the issue date
    Calendar,
    /// Success mark for minted certificates
    CheckCircle,
    /// On the "View Certificate" action
    Eye,
}

impl Icon {
    /// Stable icon name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Award => "award",
            Self::Calendar => "calendar",
            Self::CheckCircle => "check-circle",
            Self::Eye => "eye",
        }
    }

    /// SVG child elements for a 24x24 stroked icon
    #[must_use]
    pub const fn svg_body(self) -> &'static str {
        match self {
            Self::Award => {
                r#"<circle cx="12" cy="8" r="6"/><path d="M15.48 12.89 17 22l-5-3-5 3 1.52-9.11"/>"#
            },
            Self::Calendar => {
                r#"<rect width="18" height="18" x="3" y="4" rx="2"/><path d="M16 2v4M8 2v4M3 10h18"/>"#
            },
            Self::CheckCircle => {
                r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><path d="m9 11 3 3L22 4"/>"#
            },
            Self::Eye => {
                r#"<path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"/><circle cx="12" cy="12" r="3"/>"#
            },
        }
    }

    /// Single-column glyph for terminal output
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Award => '✪',
            Self::Calendar => '▦',
            Self::CheckCircle => '✔',
            Self::Eye => '→',
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
