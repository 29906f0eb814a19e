//! Dataset identifiers for coverage scoping.

/// The closed set of scan datasets a coverage query can be scoped to.
///
/// Each overlay kind tests coverage against exactly one dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanDataset {
    /// High-resolution altimetry (elevation) scans.
    AltimetryHiRes,
    /// Biome survey scans.
    Biome,
}

impl ScanDataset {
    /// All datasets, for iteration.
    pub const ALL: [ScanDataset; 2] = [ScanDataset::AltimetryHiRes, ScanDataset::Biome];

    /// The dataset's wire name, as understood by scanning-data providers.
    pub fn name(self) -> &'static str {
        match self {
            Self::AltimetryHiRes => "AltimetryHiRes",
            Self::Biome => "Biome",
        }
    }
}
