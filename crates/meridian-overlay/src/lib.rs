//! Map overlay providers: per-coordinate color and tooltip sources for a
//! planetary map view.
//!
//! An [`OverlayProvider`] turns scan data into map colors for one layer
//! (height or biome), honoring a coverage filter and a configured
//! transparency. [`render_overlay`] drives a provider across a whole map
//! region; [`OverlayEvents`] carries redraw requests back to the host.

mod events;
mod gui;
mod provider;
mod render;
mod tooltip;

pub use events::{OverlayEvents, RedrawRequested};
pub use gui::OverlayGui;
pub use provider::{OverlayKind, OverlayProvider, SampleOptions};
pub use render::{MapRegion, render_overlay};
pub use tooltip::OverlayTooltip;
