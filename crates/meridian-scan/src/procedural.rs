//! Procedural scan source: noise-driven elevation, biome, and coverage data.
//!
//! Composites multi-octave simplex noise for elevation and decorrelated
//! temperature/moisture fields for biome lookup, all sampled on the body's
//! unit sphere so queries have no seam at the antimeridian.

use glam::DVec3;
use noise::{NoiseFn, Simplex};

use meridian_body::BodyDef;
use meridian_color::Rgba;

use crate::{BiomeTable, CoverageMask, ScanData, ScanDataset, ScannedBiome};

/// Configuration for the multi-octave elevation field.
#[derive(Clone, Debug)]
pub struct ElevationParams {
    /// Number of noise octaves to composite.
    pub octaves: u32,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f64,
    /// Frequency of the first octave, in cycles per body radius.
    pub base_frequency: f64,
    /// Amplitude of the first octave in meters.
    pub amplitude_m: f64,
}

impl Default for ElevationParams {
    fn default() -> Self {
        Self {
            octaves: 5,
            lacunarity: 2.0,
            persistence: 0.5,
            base_frequency: 1.5,
            amplitude_m: 4000.0,
        }
    }
}

/// A [`ScanData`] source backed by procedural noise fields.
///
/// Coverage starts empty: nothing is covered until swaths are marked
/// scanned. The activity flag starts `true`.
pub struct ProceduralScanData {
    elevation_noise: Simplex,
    temp_noise: Simplex,
    moisture_noise: Simplex,
    params: ElevationParams,
    biomes: BiomeTable,
    /// Sea level in meters, used to place the water line in elevation colors.
    pub sea_level_m: f64,
    /// Frequency of the temperature field. Lower values give broader zones.
    pub temp_frequency: f64,
    /// Frequency of the moisture field.
    pub moisture_frequency: f64,
    altimetry_coverage: CoverageMask,
    biome_coverage: CoverageMask,
    active: bool,
}

impl ProceduralScanData {
    /// Create a source from a seed and biome table with default parameters.
    ///
    /// The three noise fields use seeds derived from `seed` so they are
    /// decorrelated.
    pub fn new(seed: u64, biomes: BiomeTable) -> Self {
        Self::with_params(seed, biomes, ElevationParams::default())
    }

    /// Create a source with explicit elevation parameters.
    pub fn with_params(seed: u64, biomes: BiomeTable, params: ElevationParams) -> Self {
        Self {
            elevation_noise: Simplex::new(seed as u32),
            temp_noise: Simplex::new(seed.wrapping_add(0x9E37_79B9) as u32),
            moisture_noise: Simplex::new(seed.wrapping_add(0xDEAD_BEEF) as u32),
            params,
            biomes,
            sea_level_m: 0.0,
            temp_frequency: 1.3,
            moisture_frequency: 1.7,
            altimetry_coverage: CoverageMask::default_resolution(),
            biome_coverage: CoverageMask::default_resolution(),
            active: true,
        }
    }

    /// Create a source seeded from a body definition.
    pub fn for_body(body: &BodyDef, biomes: BiomeTable) -> Self {
        Self::new(body.seed, biomes)
    }

    /// Toggle the activity flag.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Mark a lat/lon swath as scanned for one dataset.
    pub fn mark_scanned(
        &mut self,
        dataset: ScanDataset,
        lat_min: f64,
        lat_max: f64,
        lon_min: f64,
        lon_max: f64,
    ) {
        self.coverage_mut(dataset)
            .mark_scanned(lat_min, lat_max, lon_min, lon_max);
    }

    /// Mark the whole body as scanned for one dataset.
    pub fn mark_all_scanned(&mut self, dataset: ScanDataset) {
        self.coverage_mut(dataset).mark_all();
    }

    /// The coverage mask for one dataset.
    pub fn coverage(&self, dataset: ScanDataset) -> &CoverageMask {
        match dataset {
            ScanDataset::AltimetryHiRes => &self.altimetry_coverage,
            ScanDataset::Biome => &self.biome_coverage,
        }
    }

    fn coverage_mut(&mut self, dataset: ScanDataset) -> &mut CoverageMask {
        match dataset {
            ScanDataset::AltimetryHiRes => &mut self.altimetry_coverage,
            ScanDataset::Biome => &mut self.biome_coverage,
        }
    }

    /// Theoretical maximum of the elevation field, the geometric sum of all
    /// octave amplitudes.
    pub fn max_amplitude_m(&self) -> f64 {
        let p = self.params.persistence;
        if (p - 1.0).abs() < 1e-12 {
            return self.params.amplitude_m * self.params.octaves as f64;
        }
        self.params.amplitude_m * (1.0 - p.powi(self.params.octaves as i32)) / (1.0 - p)
    }

    fn fbm(&self, dir: DVec3) -> f64 {
        let mut total = 0.0;
        let mut frequency = self.params.base_frequency;
        let mut amplitude = self.params.amplitude_m;

        for _ in 0..self.params.octaves {
            let p = dir * frequency;
            total += self.elevation_noise.get([p.x, p.y, p.z]) * amplitude;
            frequency *= self.params.lacunarity;
            amplitude *= self.params.persistence;
        }

        total
    }
}

impl ScanData for ProceduralScanData {
    fn active(&self) -> bool {
        self.active
    }

    fn elevation_m(&self, body: &BodyDef, lon: f64, lat: f64) -> f64 {
        self.fbm(body.surface_direction(lat, lon))
    }

    fn elevation_color(&self, body: &BodyDef, lon: f64, lat: f64) -> Rgba {
        let max_amp = self.max_amplitude_m();
        let elevation = self.elevation_m(body, lon, lat);

        // Normalize [-max_amp, max_amp] to [0, 1].
        let (normalized, sea) = if max_amp > 0.0 {
            (
                (elevation + max_amp) / (2.0 * max_amp),
                (self.sea_level_m + max_amp) / (2.0 * max_amp),
            )
        } else {
            (0.5, 0.5)
        };

        elevation_to_color(normalized, sea)
    }

    fn biome_at(&self, body: &BodyDef, lon: f64, lat: f64) -> Option<ScannedBiome> {
        let dir = body.surface_direction(lat, lon);

        let t = self.temp_noise.get([
            dir.x * self.temp_frequency,
            dir.y * self.temp_frequency,
            dir.z * self.temp_frequency,
        ]);
        let m = self.moisture_noise.get([
            dir.x * self.moisture_frequency,
            dir.y * self.moisture_frequency,
            dir.z * self.moisture_frequency,
        ]);

        // Normalize from [-1, 1] to [0, 1].
        let temperature = (t + 1.0) * 0.5;
        let moisture = (m + 1.0) * 0.5;

        self.biomes
            .lookup(temperature, moisture)
            .map(|spec| ScannedBiome {
                name: spec.name.clone(),
                map_color: spec.map_color,
            })
    }

    fn is_covered(&self, _body: &BodyDef, lon: f64, lat: f64, dataset: ScanDataset) -> bool {
        self.coverage(dataset).is_covered(lat, lon)
    }
}

/// Map a normalized elevation `[0, 1]` to a hypsometric color.
///
/// `sea_level` is the normalized water line. Bands: deep water → shallow
/// water → beach → lowland → highland → snow.
pub fn elevation_to_color(normalized: f64, sea_level: f64) -> Rgba {
    let n = normalized.clamp(0.0, 1.0);
    let sea = sea_level.clamp(0.0, 1.0);

    if n < sea {
        let t = if sea > 0.0 { n / sea } else { 0.0 };
        lerp_color(Rgba::opaque(5, 15, 100), Rgba::opaque(30, 80, 200), t)
    } else if n < sea + 0.02 {
        Rgba::opaque(220, 200, 130)
    } else if n < 0.6 {
        let span = (0.6 - sea - 0.02).max(1e-9);
        let t = ((n - sea - 0.02) / span).clamp(0.0, 1.0);
        lerp_color(Rgba::opaque(60, 160, 40), Rgba::opaque(120, 130, 60), t)
    } else if n < 0.8 {
        let t = (n - 0.6) / 0.2;
        lerp_color(Rgba::opaque(120, 130, 60), Rgba::opaque(130, 110, 90), t)
    } else {
        let t = (n - 0.8) / 0.2;
        lerp_color(Rgba::opaque(160, 155, 150), Rgba::opaque(255, 255, 255), t)
    }
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

fn lerp_color(a: Rgba, b: Rgba, t: f64) -> Rgba {
    Rgba::opaque(
        lerp_channel(a.r, b.r, t),
        lerp_channel(a.g, b.g, t),
        lerp_channel(a.b, b.b, t),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_biome_table;

    fn test_body(seed: u64) -> BodyDef {
        BodyDef::earth_like("Gaia", seed)
    }

    #[test]
    fn test_elevation_is_deterministic_per_seed() {
        let body = test_body(7);
        let a = ProceduralScanData::for_body(&body, default_biome_table());
        let b = ProceduralScanData::for_body(&body, default_biome_table());
        assert_eq!(a.elevation_m(&body, 12.0, 34.0), b.elevation_m(&body, 12.0, 34.0));
    }

    #[test]
    fn test_different_seeds_differ() {
        let body = test_body(1);
        let a = ProceduralScanData::new(1, default_biome_table());
        let b = ProceduralScanData::new(2, default_biome_table());

        let mut any_diff = false;
        for lat in [-60.0, -20.0, 0.0, 20.0, 60.0] {
            if a.elevation_m(&body, 10.0, lat) != b.elevation_m(&body, 10.0, lat) {
                any_diff = true;
            }
        }
        assert!(any_diff, "different seeds should give different elevation");
    }

    #[test]
    fn test_elevation_within_amplitude_bounds() {
        let body = test_body(42);
        let scan = ProceduralScanData::for_body(&body, default_biome_table());
        let max = scan.max_amplitude_m();

        for (lat, lon) in [(0.0, 0.0), (45.0, 90.0), (-30.0, -120.0)] {
            let e = scan.elevation_m(&body, lon, lat);
            assert!(e.abs() <= max, "elevation {e} outside [-{max}, {max}]");
        }
    }

    #[test]
    fn test_biome_lookup_finds_biomes_somewhere() {
        let body = test_body(42);
        let scan = ProceduralScanData::for_body(&body, default_biome_table());

        let mut found = 0;
        for lat in (-80..=80).step_by(20) {
            for lon in (-160..=160).step_by(40) {
                if scan.biome_at(&body, lon as f64, lat as f64).is_some() {
                    found += 1;
                }
            }
        }
        assert!(found > 0, "expected at least one biome across the globe");
    }

    #[test]
    fn test_empty_biome_table_yields_no_biomes() {
        let body = test_body(42);
        let scan = ProceduralScanData::for_body(&body, BiomeTable::new(Vec::new()));
        assert!(scan.biome_at(&body, 0.0, 0.0).is_none());
    }

    #[test]
    fn test_coverage_starts_empty_and_marks() {
        let body = test_body(42);
        let mut scan = ProceduralScanData::for_body(&body, default_biome_table());

        assert!(!scan.is_covered(&body, 0.0, 0.0, ScanDataset::Biome));

        scan.mark_scanned(ScanDataset::Biome, -30.0, 30.0, -30.0, 30.0);
        assert!(scan.is_covered(&body, 0.0, 0.0, ScanDataset::Biome));
        // Other dataset stays unscanned.
        assert!(!scan.is_covered(&body, 0.0, 0.0, ScanDataset::AltimetryHiRes));

        scan.mark_all_scanned(ScanDataset::AltimetryHiRes);
        assert!(scan.is_covered(&body, 80.0, 170.0, ScanDataset::AltimetryHiRes));
    }

    #[test]
    fn test_active_flag() {
        let body = test_body(42);
        let mut scan = ProceduralScanData::for_body(&body, default_biome_table());
        assert!(scan.active());
        scan.set_active(false);
        assert!(!scan.active());
    }

    #[test]
    fn test_elevation_color_is_opaque() {
        let body = test_body(42);
        let scan = ProceduralScanData::for_body(&body, default_biome_table());
        let color = scan.elevation_color(&body, 10.0, 20.0);
        assert_eq!(color.a, 255);
    }

    #[test]
    fn test_elevation_to_color_water_is_blue() {
        let c = elevation_to_color(0.1, 0.5);
        assert!(c.b > c.r && c.b > c.g, "water should be blue, got {c:?}");
    }

    #[test]
    fn test_elevation_to_color_peaks_are_white() {
        let c = elevation_to_color(1.0, 0.5);
        assert_eq!((c.r, c.g, c.b), (255, 255, 255));
    }

    #[test]
    fn test_elevation_to_color_covers_full_range() {
        for i in 0..=100 {
            let c = elevation_to_color(i as f64 / 100.0, 0.5);
            assert_eq!(c.a, 255);
        }
    }

    #[test]
    fn test_max_amplitude_geometric_sum() {
        let params = ElevationParams {
            octaves: 3,
            persistence: 0.5,
            amplitude_m: 1000.0,
            ..Default::default()
        };
        let scan = ProceduralScanData::with_params(0, default_biome_table(), params);
        // 1000 + 500 + 250
        assert!((scan.max_amplitude_m() - 1750.0).abs() < 1e-9);
    }
}
