//! Tooltip values describing the sample under the cursor.

use glam::Vec2;

/// Human-readable description of the sampled value at a map coordinate.
///
/// Created fresh per query; the caller owns it. The size hint is advisory —
/// zero means the host picks.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayTooltip {
    /// Tooltip title. May be empty.
    pub title: String,
    /// Tooltip body text.
    pub content: String,
    /// Display size hint in host units.
    pub size: Vec2,
}

impl OverlayTooltip {
    /// Create a tooltip with a zero (host-chosen) size hint.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            size: Vec2::ZERO,
        }
    }

    /// Replace the size hint.
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_zero_size_hint() {
        let tip = OverlayTooltip::new("", "Height: 120m");
        assert_eq!(tip.size, Vec2::ZERO);
        assert_eq!(tip.content, "Height: 120m");
    }

    #[test]
    fn test_with_size() {
        let tip = OverlayTooltip::new("t", "c").with_size(Vec2::new(200.0, 80.0));
        assert_eq!(tip.size, Vec2::new(200.0, 80.0));
    }
}
