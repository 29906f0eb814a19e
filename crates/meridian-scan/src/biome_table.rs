//! Biome table: rectangular temperature/moisture regions mapped to named,
//! colored biomes.

use meridian_color::Rgba;

/// One biome region in temperature/moisture space.
///
/// Temperature and moisture are normalized to `[0.0, 1.0]`. Bounds are
/// half-open on the upper edge so adjacent regions do not overlap.
#[derive(Clone, Debug)]
pub struct BiomeSpec {
    /// Human-readable biome name.
    pub name: String,
    /// The color this biome paints on the map (opaque; overlays re-alpha it).
    pub map_color: Rgba,
    /// Inclusive lower temperature bound.
    pub temp_min: f64,
    /// Exclusive upper temperature bound.
    pub temp_max: f64,
    /// Inclusive lower moisture bound.
    pub moisture_min: f64,
    /// Exclusive upper moisture bound.
    pub moisture_max: f64,
}

impl BiomeSpec {
    fn contains(&self, temperature: f64, moisture: f64) -> bool {
        temperature >= self.temp_min
            && temperature < self.temp_max
            && moisture >= self.moisture_min
            && moisture < self.moisture_max
    }
}

/// Lookup table from (temperature, moisture) to a biome region.
///
/// Regions are checked in insertion order; the first match wins. Points
/// matching no region have no biome, which overlays render as transparent.
#[derive(Clone, Debug)]
pub struct BiomeTable {
    regions: Vec<BiomeSpec>,
}

impl BiomeTable {
    /// Create a table from a region list.
    pub fn new(regions: Vec<BiomeSpec>) -> Self {
        Self { regions }
    }

    /// Find the biome region containing the given normalized temperature and
    /// moisture, if any.
    pub fn lookup(&self, temperature: f64, moisture: f64) -> Option<&BiomeSpec> {
        self.regions
            .iter()
            .find(|r| r.contains(temperature, moisture))
    }

    /// Number of regions in the table.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns `true` if the table has no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// The stock biome table: six biomes over most of the temperature/moisture
/// plane.
///
/// The coldest, wettest corner (`temperature < 0.15`, `moisture >= 0.6`) is
/// deliberately unmapped: glaciated terrain carries no biome survey data, so
/// queries there return `None`.
pub fn default_biome_table() -> BiomeTable {
    BiomeTable::new(vec![
        BiomeSpec {
            name: "tundra".into(),
            map_color: Rgba::opaque(200, 210, 220),
            temp_min: 0.0,
            temp_max: 0.15,
            moisture_min: 0.0,
            moisture_max: 0.6,
        },
        BiomeSpec {
            name: "taiga".into(),
            map_color: Rgba::opaque(40, 90, 60),
            temp_min: 0.15,
            temp_max: 0.4,
            moisture_min: 0.4,
            moisture_max: 1.01,
        },
        BiomeSpec {
            name: "plains".into(),
            map_color: Rgba::opaque(100, 180, 60),
            temp_min: 0.15,
            temp_max: 0.7,
            moisture_min: 0.0,
            moisture_max: 0.4,
        },
        BiomeSpec {
            name: "forest".into(),
            map_color: Rgba::opaque(30, 120, 30),
            temp_min: 0.4,
            temp_max: 0.8,
            moisture_min: 0.4,
            moisture_max: 1.01,
        },
        BiomeSpec {
            name: "desert".into(),
            map_color: Rgba::opaque(220, 190, 80),
            temp_min: 0.7,
            temp_max: 1.01,
            moisture_min: 0.0,
            moisture_max: 0.4,
        },
        BiomeSpec {
            name: "rainforest".into(),
            map_color: Rgba::opaque(10, 80, 20),
            temp_min: 0.8,
            temp_max: 1.01,
            moisture_min: 0.4,
            moisture_max: 1.01,
        },
    ])
}
