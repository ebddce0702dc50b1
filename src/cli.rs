//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use certview::output::OutputMode;

/// certview - Render SkillForge certificate cards
#[derive(Parser, Debug)]
#[command(
    name = "certview",
    version,
    about = "Render SkillForge certificate cards",
    long_about = "Render certificate records as cards.\n\n\
                  Certificates are read from JSON or TOML files and rendered\n\
                  as HTML pages, HTML fragments or terminal cards."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render certificates as HTML
    Render {
        /// Certificate file (JSON or TOML)
        file: PathBuf,

        /// Only render the certificate with this id
        #[arg(long)]
        id: Option<String>,

        /// Emit bare card fragments instead of a full page
        #[arg(long)]
        fragment: bool,

        /// Write HTML to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show certificates as terminal cards
    Show {
        /// Certificate file (JSON or TOML)
        file: PathBuf,

        /// Only show the certificate with this id
        #[arg(long)]
        id: Option<String>,

        /// Disable colours
        #[arg(long)]
        no_color: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the default config file if none exists
        #[arg(long)]
        init: bool,
    },

    /// Start a local preview server
    #[cfg(feature = "ui")]
    Ui {
        /// Certificate file (JSON or TOML)
        file: PathBuf,

        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Open the browser
        #[arg(long)]
        open: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Render {
            file,
            id,
            fragment,
            out,
        }) => commands::render(&file, id.as_deref(), fragment, out.as_deref(), output_mode),
        Some(Command::Show { file, id, no_color }) => {
            commands::show(&file, id.as_deref(), no_color, output_mode)
        },
        Some(Command::Config { init }) => commands::config(init, output_mode),
        #[cfg(feature = "ui")]
        Some(Command::Ui { file, port, open }) => commands::ui(file, port, open),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("certview v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("certview v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'certview --help' for usage");
                println!("Run 'certview show <file>' to preview certificates");
            }
            Ok(())
        },
    }
}
