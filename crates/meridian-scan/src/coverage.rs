//! Coverage mask: which parts of a body have been scanned for a dataset.

/// A lat/lon grid of scanned/unscanned cells for one dataset.
///
/// The grid spans latitude `[-90, 90]` and longitude `[-180, 180)`;
/// longitude wraps. A freshly created mask reports nothing as covered.
#[derive(Clone, Debug)]
pub struct CoverageMask {
    cells_lat: u32,
    cells_lon: u32,
    scanned: Vec<bool>,
}

impl CoverageMask {
    /// Create an all-unscanned mask with the given grid resolution.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(cells_lat: u32, cells_lon: u32) -> Self {
        assert!(
            cells_lat > 0 && cells_lon > 0,
            "coverage grid must have at least one cell per axis"
        );
        Self {
            cells_lat,
            cells_lon,
            scanned: vec![false; (cells_lat * cells_lon) as usize],
        }
    }

    /// Default resolution: 2° cells (90 × 180 grid).
    pub fn default_resolution() -> Self {
        Self::new(90, 180)
    }

    fn cell_index(&self, lat: f64, lon: f64) -> usize {
        // Row 0 is the north edge; latitude is clamped, longitude wraps.
        let row_f = (90.0 - lat.clamp(-90.0, 90.0)) / 180.0 * self.cells_lat as f64;
        let row = (row_f as u32).min(self.cells_lat - 1);

        let col_f = (lon + 180.0).rem_euclid(360.0) / 360.0 * self.cells_lon as f64;
        let col = (col_f as u32).min(self.cells_lon - 1);

        (row * self.cells_lon + col) as usize
    }

    /// Whether the cell containing the coordinate has been scanned.
    pub fn is_covered(&self, lat: f64, lon: f64) -> bool {
        self.scanned[self.cell_index(lat, lon)]
    }

    /// Mark every cell whose center falls inside the given bounds as scanned.
    ///
    /// Bounds are degrees with `lat_min <= lat_max` and
    /// `lon_min <= lon_max`, both in `[-180, 180]` for longitude.
    pub fn mark_scanned(&mut self, lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) {
        for row in 0..self.cells_lat {
            let lat = 90.0 - (row as f64 + 0.5) / self.cells_lat as f64 * 180.0;
            if lat < lat_min || lat > lat_max {
                continue;
            }
            for col in 0..self.cells_lon {
                let lon = -180.0 + (col as f64 + 0.5) / self.cells_lon as f64 * 360.0;
                if lon < lon_min || lon > lon_max {
                    continue;
                }
                self.scanned[(row * self.cells_lon + col) as usize] = true;
            }
        }
    }

    /// Mark the whole body as scanned.
    pub fn mark_all(&mut self) {
        self.scanned.fill(true);
    }

    /// Fraction of cells scanned, in `[0.0, 1.0]`.
    pub fn coverage_fraction(&self) -> f64 {
        let covered = self.scanned.iter().filter(|&&c| c).count();
        covered as f64 / self.scanned.len() as f64
    }
}
