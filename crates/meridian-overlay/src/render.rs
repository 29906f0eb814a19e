//! Per-pixel map rendering driven by an overlay provider.

use meridian_body::BodyDef;
use meridian_color::MapImage;
use meridian_scan::ScanData;

use crate::{OverlayProvider, SampleOptions};

/// Geographic bounds of a rendered map view, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapRegion {
    /// Southern edge.
    pub lat_min: f64,
    /// Northern edge.
    pub lat_max: f64,
    /// Western edge.
    pub lon_min: f64,
    /// Eastern edge.
    pub lon_max: f64,
}

impl MapRegion {
    /// Create a region.
    ///
    /// # Panics
    ///
    /// Panics if either axis is empty or inverted.
    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        assert!(
            lat_min < lat_max && lon_min < lon_max,
            "map region must have positive extent"
        );
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    /// The whole body in equirectangular projection.
    pub fn full_globe() -> Self {
        Self::new(-90.0, 90.0, -180.0, 180.0)
    }
}

/// Render one overlay layer into an image.
///
/// Samples [`OverlayProvider::calculate_color`] at each pixel center. Row 0
/// is the region's northern edge, so a full-globe render puts north at the
/// top of the image.
pub fn render_overlay(
    provider: &OverlayProvider,
    scan: &dyn ScanData,
    body: &BodyDef,
    width: u32,
    height: u32,
    region: MapRegion,
    opts: &SampleOptions,
) -> MapImage {
    let mut image = MapImage::new(width, height);
    let lat_span = region.lat_max - region.lat_min;
    let lon_span = region.lon_max - region.lon_min;

    for py in 0..height {
        let lat = region.lat_max - (py as f64 + 0.5) / height as f64 * lat_span;
        for px in 0..width {
            let lon = region.lon_min + (px as f64 + 0.5) / width as f64 * lon_span;
            image.set_pixel(px, py, provider.calculate_color(scan, body, lat, lon, opts));
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use meridian_color::Rgba;
    use meridian_scan::{ScanDataset, ScannedBiome};

    use super::*;
    use crate::OverlayKind;

    /// Source whose elevation color encodes the hemisphere: red north, blue
    /// south. Everything covered, always active.
    struct HemisphereScan;

    impl ScanData for HemisphereScan {
        fn active(&self) -> bool {
            true
        }

        fn elevation_m(&self, _body: &BodyDef, _lon: f64, lat: f64) -> f64 {
            lat
        }

        fn elevation_color(&self, _body: &BodyDef, _lon: f64, lat: f64) -> Rgba {
            if lat >= 0.0 {
                Rgba::opaque(255, 0, 0)
            } else {
                Rgba::opaque(0, 0, 255)
            }
        }

        fn biome_at(&self, _body: &BodyDef, _lon: f64, _lat: f64) -> Option<ScannedBiome> {
            None
        }

        fn is_covered(
            &self,
            _body: &BodyDef,
            _lon: f64,
            _lat: f64,
            _dataset: ScanDataset,
        ) -> bool {
            true
        }
    }

    fn body() -> BodyDef {
        BodyDef::earth_like("Gaia", 42)
    }

    #[test]
    fn test_render_dimensions_match_request() {
        let provider = OverlayProvider::new(OverlayKind::Heightmap);
        let image = render_overlay(
            &provider,
            &HemisphereScan,
            &body(),
            64,
            32,
            MapRegion::full_globe(),
            &SampleOptions::default(),
        );
        assert_eq!(image.dimensions(), (64, 32));
    }

    #[test]
    fn test_north_is_at_the_top() {
        let provider = OverlayProvider::new(OverlayKind::Heightmap);
        let image = render_overlay(
            &provider,
            &HemisphereScan,
            &body(),
            4,
            4,
            MapRegion::full_globe(),
            &SampleOptions::default(),
        );

        let top = image.get_pixel(0, 0);
        let bottom = image.get_pixel(0, 3);
        assert_eq!((top.r, top.g, top.b), (255, 0, 0), "north rows should be red");
        assert_eq!((bottom.r, bottom.g, bottom.b), (0, 0, 255), "south rows should be blue");
    }

    #[test]
    fn test_rendered_pixels_carry_provider_alpha() {
        let mut provider = OverlayProvider::new(OverlayKind::Heightmap);
        provider.set_alpha(77);
        let image = render_overlay(
            &provider,
            &HemisphereScan,
            &body(),
            8,
            4,
            MapRegion::full_globe(),
            &SampleOptions::default(),
        );
        assert!(image.pixels().all(|p| p.a == 77));
    }

    #[test]
    fn test_biome_layer_without_biomes_renders_transparent() {
        let provider = OverlayProvider::new(OverlayKind::Biome);
        let image = render_overlay(
            &provider,
            &HemisphereScan,
            &body(),
            8,
            4,
            MapRegion::full_globe(),
            &SampleOptions::default(),
        );
        assert!(image.pixels().all(|p| p.is_transparent()));
    }

    #[test]
    #[should_panic(expected = "positive extent")]
    fn test_inverted_region_rejected() {
        let _ = MapRegion::new(10.0, -10.0, 0.0, 20.0);
    }
}
