//! Tunable interaction parameters

use serde::{Deserialize, Serialize};

use crate::constants::drag;

/// Interaction configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GizmoConfig {
    /// On-screen length the widget is held at, in pixels
    pub screen_length_px: f32,
    /// Pixels of axis-aligned drag per unit change of the scale factor.
    /// Empirically tuned; larger values make scaling less sensitive.
    pub scale_sensitivity: f32,
    /// Whether drag results propagate to the bound target, or only move the
    /// gizmo's own displayed pose
    pub apply_to_target: bool,
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self {
            screen_length_px: drag::SCREEN_LENGTH_PX,
            scale_sensitivity: drag::SCALE_SENSITIVITY,
            apply_to_target: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_constants() {
        let config = GizmoConfig::default();
        assert_eq!(config.scale_sensitivity, drag::SCALE_SENSITIVITY);
        assert_eq!(config.screen_length_px, drag::SCREEN_LENGTH_PX);
        assert!(config.apply_to_target);
    }
}
