//! Terminal rendering of a card

use colored::Colorize;

use crate::models::MintStatus;
use crate::view::{CardAction, CertificateView, Icon};

/// Narrowest inner width of a terminal card
const MIN_WIDTH: usize = 36;

/// Renders card views as boxed terminal text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    color: bool,
}

/// A centred line: plain text for measuring, styled text for output
struct Line {
    plain: String,
    styled: String,
}

impl TextRenderer {
    /// Renderer with colour on or off
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render one card
    #[must_use]
    pub fn render(&self, view: &CertificateView) -> String {
        let mut lines = vec![
            self.line(format!("{}", Icon::Award.glyph()), |s| s.magenta().bold().to_string()),
            self.line(view.heading.brand.clone(), |s| s.bold().to_string()),
            self.line(view.heading.title.clone(), |s| s.dimmed().to_string()),
            self.line(String::new(), str::to_string),
            self.line(view.role.clone(), |s| s.bold().to_string()),
            self.line(format!("[ {} ]", view.score_label), |s| s.reversed().to_string()),
            self.line(format!("{} {}", Icon::Calendar.glyph(), view.date), |s| {
                s.dimmed().to_string()
            }),
        ];

        lines.push(match view.mint {
            MintStatus::Minted => self.line(
                format!("{} {}", Icon::CheckCircle.glyph(), view.mint.label()),
                |s| s.green().to_string(),
            ),
            MintStatus::NotMinted => {
                self.line(format!("( {} )", view.mint.label()), |s| s.dimmed().to_string())
            },
        });

        if let CardAction::ViewDetails { label, href } = &view.action {
            lines.push(self.line(String::new(), str::to_string));
            lines.push(self.line(format!("{} {label}", Icon::Eye.glyph()), |s| {
                s.cyan().bold().to_string()
            }));
            lines.push(self.line(href.clone(), |s| s.cyan().underline().to_string()));
        }

        let width = lines
            .iter()
            .map(|l| l.plain.chars().count() + 4)
            .max()
            .unwrap_or(0)
            .max(MIN_WIDTH);

        let mut out = format!("╭{}╮\n", "─".repeat(width));
        for line in &lines {
            let len = line.plain.chars().count();
            let left = (width - len) / 2;
            let right = width - len - left;
            out.push('│');
            out.push_str(&" ".repeat(left));
            out.push_str(&line.styled);
            out.push_str(&" ".repeat(right));
            out.push_str("│\n");
        }
        out.push_str(&format!("╰{}╯", "─".repeat(width)));
        out
    }

    /// Render several cards separated by blank lines
    #[must_use]
    pub fn render_all(&self, views: &[CertificateView]) -> String {
        views.iter().map(|v| self.render(v)).collect::<Vec<_>>().join("\n\n")
    }

    fn line(&self, plain: String, style: impl Fn(&str) -> String) -> Line {
        let plain = visible(&plain);
        let styled = if self.color && !plain.is_empty() { style(&plain) } else { plain.clone() };
        Line { plain, styled }
    }
}

/// Replace control characters with their escaped form (`\n`, `\u{1b}`)
///
/// Certificate fields are caller data; raw control characters would move
/// the cursor or restyle the terminal and break the box.
fn visible(text: &str) -> String {
    if !text.chars().any(char::is_control) {
        return text.to_string();
    }
    text.chars()
        .map(|c| if c.is_control() { c.escape_debug().to_string() } else { c.to_string() })
        .collect()
}
