//! Command-line argument parsing for the overlay demo.

use std::path::PathBuf;

use clap::Parser;

use crate::OverlaySettings;

/// Overlay demo command-line arguments.
///
/// CLI values override settings loaded from `overlays.ron`.
#[derive(Parser, Debug)]
#[command(name = "meridian", about = "Planetary scan-overlay renderer")]
pub struct CliArgs {
    /// Rendered map width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Rendered map height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Body to render, by name.
    #[arg(long)]
    pub body: Option<String>,

    /// Output directory for rendered images.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Path to the settings directory (overrides default location).
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl OverlaySettings {
    /// Apply CLI overrides to loaded settings.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.view.width = w;
        }
        if let Some(h) = args.height {
            self.view.height = h;
        }
    }
}
