//! Color primitives for map overlays: the per-coordinate RGBA sample and the
//! rendered map image buffer.

mod image;
mod rgba;

pub use image::MapImage;
pub use rgba::Rgba;
