//! Settings persistence for map overlays.
//!
//! Overlay settings persist to disk as RON. Loading is tolerant: a missing
//! section or field takes its default, and an unreadable or unparsable file
//! falls back to full defaults with a logged diagnostic instead of an error
//! reaching the overlay layer.

mod cli;
mod error;
mod settings;

pub use cli::CliArgs;
pub use error::SettingsError;
pub use settings::{DEFAULT_ALPHA, LayerSettings, OverlaySettings, ViewSettings};
