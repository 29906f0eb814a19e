//! The scanning-data source contract consumed by overlay providers.

use meridian_body::BodyDef;
use meridian_color::Rgba;

use crate::ScanDataset;

/// A biome as reported by a scan source: its display name and the color it
/// paints on the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannedBiome {
    /// Human-readable biome name (e.g., "forest").
    pub name: String,
    /// The biome's map color. Source-native alpha; providers override it.
    pub map_color: Rgba,
}

/// Source of elevation, biome, and coverage data for a celestial body.
///
/// All queries are synchronous and expected to be cheap (in-memory lookups).
/// Longitude and latitude are in degrees; longitude positive east, latitude
/// positive north.
pub trait ScanData {
    /// Whether scanning data is available at all. When a source is inactive,
    /// coverage filtering is skipped entirely.
    fn active(&self) -> bool;

    /// Terrain elevation in meters at the coordinate.
    fn elevation_m(&self, body: &BodyDef, lon: f64, lat: f64) -> f64;

    /// Elevation-derived color at the coordinate.
    fn elevation_color(&self, body: &BodyDef, lon: f64, lat: f64) -> Rgba;

    /// The biome at the coordinate, or `None` where the source defines none.
    fn biome_at(&self, body: &BodyDef, lon: f64, lat: f64) -> Option<ScannedBiome>;

    /// Whether the coordinate has been scanned for the given dataset.
    fn is_covered(&self, body: &BodyDef, lon: f64, lat: f64, dataset: ScanDataset) -> bool;
}
