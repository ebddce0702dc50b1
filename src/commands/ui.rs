//! Local preview UI command
//!
//! Serves the certificate gallery, detail pages and the JSON API.

use std::io;
use std::path::PathBuf;
use std::process::Command;

use tiny_http::Server;

use crate::server::tiny_http::{PreviewState, handle_request};
use certview::config::CertviewConfig;
use certview::loader;

/// Start the local preview server
pub fn ui(file: PathBuf, port: Option<u16>, open: bool) -> anyhow::Result<()> {
    let config = CertviewConfig::load();
    let port = port.unwrap_or(config.ui.port);

    // Fail fast on a bad file; later requests re-read it
    let count = loader::load_file(&file)?.len();

    let addr = format!("127.0.0.1:{port}");
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;

    log::info!("Serving {count} certificate(s) from {}", file.display());
    println!("Starting certview UI...");
    println!("Open http://localhost:{port} in your browser");
    println!();
    println!("Press Ctrl+C to stop");

    if open {
        let url = format!("http://localhost:{port}");
        if let Err(e) = open_browser(&url) {
            log::warn!("Could not open a browser at {url}: {e}");
        }
    }

    let state = PreviewState {
        source: file,
        card: config.card,
    };

    for mut request in server.incoming_requests() {
        let response = handle_request(&mut request, &state);
        if let Err(e) = request.respond(response) {
            log::warn!("Failed to send response: {e}");
        }
    }

    Ok(())
}

/// Launch the platform browser at `url` without waiting for it
fn open_browser(url: &str) -> io::Result<()> {
    let mut command = browser_command(url).ok_or_else(|| {
        io::Error::new(io::ErrorKind::Unsupported, "no browser launcher for this platform")
    })?;
    command.spawn().map(drop)
}

fn browser_command(url: &str) -> Option<Command> {
    let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/c", "start"])
    } else if cfg!(target_os = "linux") {
        ("xdg-open", &[])
    } else {
        return None;
    };
    let mut command = Command::new(program);
    command.args(args).arg(url);
    Some(command)
}
