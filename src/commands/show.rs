//! Show command

use std::io::IsTerminal;
use std::path::Path;

use certview::config::CertviewConfig;
use certview::output::{OutputMode, ShowResult};
use certview::view::CertificateView;

use super::load_selected;

/// Print certificates from `file` as terminal cards
pub fn show(file: &Path, id: Option<&str>, no_color: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config = CertviewConfig::load();
    let certs = load_selected(file, id)?;

    let cards = certs.iter().map(|cert| CertificateView::new(cert, &config.card)).collect();
    let color = !no_color && std::io::stdout().is_terminal();

    ShowResult { cards, color }.render(mode);
    Ok(())
}
