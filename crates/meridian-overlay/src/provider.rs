//! Overlay providers: one per map layer, each mapping a geographic
//! coordinate to a color and a tooltip via the scan-data source.

use meridian_body::BodyDef;
use meridian_color::Rgba;
use meridian_config::{DEFAULT_ALPHA, LayerSettings, OverlaySettings};
use meridian_scan::{ScanData, ScanDataset};

use crate::{OverlayEvents, OverlayGui, OverlayTooltip};

/// The closed set of overlay layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// Elevation-derived colors.
    Heightmap,
    /// Biome map colors.
    Biome,
}

impl OverlayKind {
    /// All layers, for iteration.
    pub const ALL: [OverlayKind; 2] = [OverlayKind::Heightmap, OverlayKind::Biome];

    /// Display label for layer pickers.
    pub fn gui_name(self) -> &'static str {
        match self {
            Self::Heightmap => "Height Map",
            Self::Biome => "Biome Map",
        }
    }

    /// The scan dataset this layer's coverage test is scoped to.
    pub fn dataset(self) -> ScanDataset {
        match self {
            Self::Heightmap => ScanDataset::AltimetryHiRes,
            Self::Biome => ScanDataset::Biome,
        }
    }
}

/// Per-query options passed in by the host.
#[derive(Clone, Copy, Debug)]
pub struct SampleOptions {
    /// Suppress color where the scan source reports no coverage.
    pub use_coverage_filter: bool,
    /// Carried for contract uniformity; consumed by no current layer.
    pub bright: bool,
    /// Carried for contract uniformity; consumed by no current layer.
    pub cutoff: f64,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            use_coverage_filter: false,
            bright: false,
            cutoff: 0.0,
        }
    }
}

/// A map overlay layer bound to the scan-data source.
///
/// One provider exists per [`OverlayKind`], constructed once at load. The
/// provider's only mutable state is its configured transparency and the
/// body it is currently displayed on.
#[derive(Clone, Debug)]
pub struct OverlayProvider {
    kind: OverlayKind,
    alpha: u8,
    body: Option<BodyDef>,
}

impl OverlayProvider {
    /// Create a provider for one layer with default transparency.
    pub fn new(kind: OverlayKind) -> Self {
        Self {
            kind,
            alpha: DEFAULT_ALPHA,
            body: None,
        }
    }

    /// Which layer this provider renders.
    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    /// Display label for layer pickers.
    pub fn gui_name(&self) -> &'static str {
        self.kind.gui_name()
    }

    /// The configured transparency applied to every sample.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Set the transparency applied to every sample.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    /// The body this provider is currently displayed on, if any.
    pub fn bound_body(&self) -> Option<&BodyDef> {
        self.body.as_ref()
    }

    /// Whether this provider may be activated. Always `true` for the current
    /// layers; an extension point for layers with preconditions.
    pub fn can_activate(&self) -> bool {
        true
    }

    /// Bind the provider to a body and request a redraw.
    pub fn activate(&mut self, body: &BodyDef, events: &mut OverlayEvents) {
        self.body = Some(body.clone());
        events.request_redraw(self.kind);
        tracing::debug!(layer = self.gui_name(), body = %body.name, "overlay activated");
    }

    /// Unbind the provider. No redraw is requested.
    pub fn deactivate(&mut self) {
        self.body = None;
    }

    /// Compute the overlay color at a coordinate.
    ///
    /// With the coverage filter on and an active source, uncovered
    /// coordinates are fully transparent. Otherwise the layer's sample color
    /// is returned with its alpha channel overwritten by the configured
    /// transparency. The biome layer is also transparent wherever the source
    /// defines no biome.
    pub fn calculate_color(
        &self,
        scan: &dyn ScanData,
        body: &BodyDef,
        lat: f64,
        lon: f64,
        opts: &SampleOptions,
    ) -> Rgba {
        if opts.use_coverage_filter
            && scan.active()
            && !self.is_covered_at(scan, body, lat, lon)
        {
            return Rgba::TRANSPARENT;
        }

        match self.kind {
            OverlayKind::Heightmap => scan.elevation_color(body, lon, lat).with_alpha(self.alpha),
            OverlayKind::Biome => match scan.biome_at(body, lon, lat) {
                Some(biome) => biome.map_color.with_alpha(self.alpha),
                None => Rgba::TRANSPARENT,
            },
        }
    }

    /// Describe the sampled value at a coordinate.
    ///
    /// Returns `None` where the layer has nothing to describe — for the
    /// biome layer, exactly the coordinates its colors are transparent at.
    pub fn tooltip_content(
        &self,
        scan: &dyn ScanData,
        body: &BodyDef,
        lat: f64,
        lon: f64,
    ) -> Option<OverlayTooltip> {
        match self.kind {
            OverlayKind::Heightmap => {
                let elevation = scan.elevation_m(body, lon, lat);
                Some(OverlayTooltip::new("", format!("Height: {elevation:.0}m")))
            }
            OverlayKind::Biome => scan
                .biome_at(body, lon, lat)
                .map(|biome| OverlayTooltip::new("", format!("Biome: {}", biome.name))),
        }
    }

    /// Whether the coordinate is covered by this layer's scan dataset.
    pub fn is_covered_at(&self, scan: &dyn ScanData, body: &BodyDef, lat: f64, lon: f64) -> bool {
        scan.is_covered(body, lon, lat, self.kind.dataset())
    }

    /// Draw provider-specific GUI controls. Neither current layer has any.
    pub fn draw_gui(&mut self, _gui: &mut dyn OverlayGui) {}

    /// Restore this layer's transparency from settings.
    pub fn load_settings(&mut self, settings: &OverlaySettings) {
        self.alpha = self.layer(settings).alpha;
    }

    /// Persist this layer's transparency into settings.
    pub fn save_settings(&self, settings: &mut OverlaySettings) {
        self.layer_mut(settings).alpha = self.alpha;
    }

    fn layer<'a>(&self, settings: &'a OverlaySettings) -> &'a LayerSettings {
        match self.kind {
            OverlayKind::Heightmap => &settings.heightmap,
            OverlayKind::Biome => &settings.biomemap,
        }
    }

    fn layer_mut<'a>(&self, settings: &'a mut OverlaySettings) -> &'a mut LayerSettings {
        match self.kind {
            OverlayKind::Heightmap => &mut settings.heightmap,
            OverlayKind::Biome => &mut settings.biomemap,
        }
    }
}
