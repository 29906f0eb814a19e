//! Scanning-data source abstraction for map overlays, plus a procedural
//! implementation.
//!
//! Overlay providers query a [`ScanData`] source for elevation, biome, and
//! coverage information. [`ProceduralScanData`] answers those queries from
//! noise-driven fields so the whole stack runs without an external scanner.

mod biome_table;
mod coverage;
mod data;
mod dataset;
mod procedural;

pub use biome_table::{BiomeSpec, BiomeTable, default_biome_table};
pub use coverage::CoverageMask;
pub use data::{ScanData, ScannedBiome};
pub use dataset::ScanDataset;
pub use procedural::{ElevationParams, ProceduralScanData, elevation_to_color};
