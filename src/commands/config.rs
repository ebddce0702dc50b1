//! Config command

use certview::config::CertviewConfig;
use certview::output::{ConfigResult, OperationResult, OutputMode};

/// Print the effective config, or write the default one with `init`
pub fn config(init: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = CertviewConfig::config_path();

    if init {
        if path.exists() {
            OperationResult {
                success: true,
                message: format!("Config already exists at {}", path.display()),
            }
            .render(mode);
            return Ok(());
        }
        let written = CertviewConfig::default().save()?;
        OperationResult {
            success: true,
            message: format!("Created {}", written.display()),
        }
        .render(mode);
        return Ok(());
    }

    ConfigResult {
        path: path.display().to_string(),
        exists: path.exists(),
        config: CertviewConfig::load(),
    }
    .render(mode);
    Ok(())
}
