//! Overlay settings structs with per-section defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Default overlay transparency.
pub const DEFAULT_ALPHA: u8 = 100;

const SETTINGS_FILE: &str = "overlays.ron";

/// Top-level overlay settings.
///
/// Every section is `#[serde(default)]`, so absent sections or fields take
/// their defaults when loading older or hand-edited files.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverlaySettings {
    /// Height map layer settings.
    pub heightmap: LayerSettings,
    /// Biome map layer settings.
    pub biomemap: LayerSettings,
    /// Map view settings.
    pub view: ViewSettings,
}

/// Per-layer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayerSettings {
    /// Layer transparency. 0 = invisible, 255 = opaque.
    pub alpha: u8,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// Map view settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewSettings {
    /// Rendered map width in pixels.
    pub width: u32,
    /// Rendered map height in pixels.
    pub height: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 320,
        }
    }
}

impl OverlaySettings {
    /// Load settings from `overlays.ron` in the given directory.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the file cannot be read or parsed. Use
    /// [`load_or_default`](Self::load_or_default) for the tolerant path.
    pub fn try_load(settings_dir: &Path) -> Result<Self, SettingsError> {
        let path = settings_dir.join(SETTINGS_FILE);
        let contents = std::fs::read_to_string(&path).map_err(SettingsError::Read)?;
        ron::from_str(&contents).map_err(SettingsError::Parse)
    }

    /// Load settings, substituting full defaults on any failure.
    ///
    /// A missing file is the normal first-run case and logs at debug level;
    /// an unreadable or malformed file logs a warning. Either way the caller
    /// gets usable settings and no error propagates.
    pub fn load_or_default(settings_dir: &Path) -> Self {
        let path = settings_dir.join(SETTINGS_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }
        match Self::try_load(settings_dir) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "could not load settings, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Save settings to `overlays.ron` in the given directory, creating the
    /// directory if needed.
    pub fn save(&self, settings_dir: &Path) -> Result<(), SettingsError> {
        std::fs::create_dir_all(settings_dir).map_err(SettingsError::Write)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(SettingsError::Serialize)?;

        std::fs::write(settings_dir.join(SETTINGS_FILE), serialized)
            .map_err(SettingsError::Write)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alpha_is_100() {
        let settings = OverlaySettings::default();
        assert_eq!(settings.heightmap.alpha, 100);
        assert_eq!(settings.biomemap.alpha, 100);
    }

    #[test]
    fn test_settings_roundtrip() {
        let mut settings = OverlaySettings::default();
        settings.heightmap.alpha = 42;
        settings.biomemap.alpha = 255;

        let ron_str = ron::to_string(&settings).unwrap();
        let deserialized: OverlaySettings = ron::from_str(&ron_str).unwrap();
        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        // File written before the biomemap layer existed.
        let ron_str = "(heightmap: (alpha: 7))";
        let settings: OverlaySettings = ron::from_str(ron_str).unwrap();
        assert_eq!(settings.heightmap.alpha, 7);
        assert_eq!(settings.biomemap, LayerSettings::default());
        assert_eq!(settings.view, ViewSettings::default());
    }

    #[test]
    fn test_missing_alpha_field_uses_default() {
        let ron_str = "(heightmap: ())";
        let settings: OverlaySettings = ron::from_str(ron_str).unwrap();
        assert_eq!(settings.heightmap.alpha, DEFAULT_ALPHA);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = OverlaySettings::default();
        settings.heightmap.alpha = 200;
        settings.view.width = 1024;

        settings.save(dir.path()).unwrap();
        let loaded = OverlaySettings::try_load(dir.path()).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = OverlaySettings::load_or_default(dir.path());
        assert_eq!(settings, OverlaySettings::default());
    }

    #[test]
    fn test_load_or_default_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("overlays.ron"), "(heightmap: (alpha: \"loud\"))")
            .unwrap();

        let settings = OverlaySettings::load_or_default(dir.path());
        assert_eq!(settings.heightmap.alpha, DEFAULT_ALPHA);
    }

    #[test]
    fn test_try_load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("overlays.ron"), "{{not valid}}").unwrap();

        match OverlaySettings::try_load(dir.path()) {
            Err(SettingsError::Parse(_)) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_alpha_out_of_byte_range_is_rejected() {
        let result: Result<OverlaySettings, _> = ron::from_str("(heightmap: (alpha: 300))");
        assert!(result.is_err());
    }
}
