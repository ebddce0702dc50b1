//! Render command

use std::fs;
use std::path::Path;

use certview::config::CertviewConfig;
use certview::output::{OperationResult, OutputMode, RenderResult, RenderedCard};
use certview::render::HtmlRenderer;
use certview::view::CertificateView;

use super::load_selected;

/// Render certificates from `file` as HTML
pub fn render(
    file: &Path,
    id: Option<&str>,
    fragment: bool,
    out: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = CertviewConfig::load();
    let certs = load_selected(file, id)?;
    let renderer = HtmlRenderer::new();

    let cards: Vec<RenderedCard> = certs
        .iter()
        .map(|cert| {
            let view = CertificateView::new(cert, &config.card);
            RenderedCard {
                id: cert.detail_id().map(String::from),
                html: renderer.render_card(&view),
                view,
            }
        })
        .collect();

    let output: String = if fragment {
        cards.iter().map(|c| format!("{}\n", c.html)).collect()
    } else {
        let views: Vec<CertificateView> = cards.iter().map(|c| c.view.clone()).collect();
        renderer.render_page(&config.card.brand, &views)
    };

    log::debug!("Rendered {} card(s) from {}", cards.len(), file.display());

    if let Some(path) = out {
        fs::write(path, &output)?;
        OperationResult {
            success: true,
            message: format!("Wrote {} card(s) to {}", cards.len(), path.display()),
        }
        .render(mode);
        return Ok(());
    }

    RenderResult { cards, output }.render(mode);
    Ok(())
}
