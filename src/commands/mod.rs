//! Command implementations

mod config;
mod render;
mod show;
#[cfg(feature = "ui")]
mod ui;

use std::path::Path;

use certview::loader;
use certview::models::Certificate;

pub use config::config;
pub use render::render;
pub use show::show;
#[cfg(feature = "ui")]
pub use ui::ui;

/// Load certificates from a file, keeping only `id` when given
fn load_selected(file: &Path, id: Option<&str>) -> anyhow::Result<Vec<Certificate>> {
    let certs = loader::load_file(file)?;
    match id {
        None => Ok(certs),
        Some(id) => loader::find(&certs, id)
            .cloned()
            .map(|cert| vec![cert])
            .ok_or_else(|| anyhow::anyhow!("Certificate '{id}' not found")),
    }
}
