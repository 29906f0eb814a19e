//! Body definition — the canonical data structure for a celestial body's
//! immutable parameters.

use glam::DVec3;

/// Definition of a celestial body.
///
/// This is the immutable specification of a body. It carries no runtime
/// state; overlay providers bind to one while they are displayed and scan
/// sources use its seed and geometry to answer coordinate queries.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyDef {
    /// Unique human-readable name (e.g., "Gaia", "Selene").
    pub name: String,

    /// Radius of the body's reference sphere in meters. Must be positive.
    pub radius_m: f64,

    /// Seed for all procedurally derived data on this body.
    pub seed: u64,
}

impl BodyDef {
    /// Construct a new body definition.
    ///
    /// # Panics
    ///
    /// Panics if `radius_m` is not positive.
    pub fn new(name: impl Into<String>, radius_m: f64, seed: u64) -> Self {
        assert!(
            radius_m > 0.0,
            "Body radius must be positive, got {radius_m}"
        );
        Self {
            name: name.into(),
            radius_m,
            seed,
        }
    }

    /// Earth-like body preset (radius 6,371 km).
    pub fn earth_like(name: impl Into<String>, seed: u64) -> Self {
        Self::new(name, 6_371_000.0, seed)
    }

    /// Moon-like body preset (radius 1,737.4 km).
    pub fn moon_like(name: impl Into<String>, seed: u64) -> Self {
        Self::new(name, 1_737_400.0, seed)
    }

    /// The circumference of the body's reference sphere in meters.
    pub fn circumference_m(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius_m
    }

    /// Convert a geographic coordinate to a unit direction from the body
    /// center.
    ///
    /// Latitude in degrees, positive north; longitude in degrees, positive
    /// east. Scan sources sample 3D fields along this direction so queries
    /// have no seam at the antimeridian.
    pub fn surface_direction(&self, lat_deg: f64, lon_deg: f64) -> DVec3 {
        let lat_rad = lat_deg.to_radians();
        let lon_rad = lon_deg.to_radians();
        DVec3::new(
            lat_rad.cos() * lon_rad.cos(),
            lat_rad.sin(),
            lat_rad.cos() * lon_rad.sin(),
        )
    }
}
