//! Manipulation modes and handle visuals

use serde::{Deserialize, Serialize};

use crate::axis::GizmoAxis;
use crate::constants::colors;
use crate::scene::PickTarget;

/// Gizmo manipulation mode.
///
/// Exactly one mode is active; it alone decides which handle-set is visible
/// and pickable, and which drag math a pointer move dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GizmoMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

/// Per-axis handle colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlePalette {
    pub x_axis: [f32; 4],
    pub y_axis: [f32; 4],
    pub z_axis: [f32; 4],
    pub highlight: [f32; 4],
}

impl Default for HandlePalette {
    fn default() -> Self {
        Self {
            x_axis: colors::X_AXIS,
            y_axis: colors::Y_AXIS,
            z_axis: colors::Z_AXIS,
            highlight: colors::HIGHLIGHT,
        }
    }
}

impl HandlePalette {
    /// Normal (unhighlighted) color of an axis
    pub fn axis_color(&self, axis: GizmoAxis) -> [f32; 4] {
        match axis {
            GizmoAxis::X => self.x_axis,
            GizmoAxis::Y => self.y_axis,
            GizmoAxis::Z => self.z_axis,
        }
    }
}

/// Active mode plus per-axis hover state.
///
/// The visible handle-set is derived from the mode by pattern match; there
/// are no separate visibility flags to keep in sync.
#[derive(Debug, Clone, Default)]
pub struct ModeState {
    mode: GizmoMode,
    palette: HandlePalette,
    hovered: Option<GizmoAxis>,
}

impl ModeState {
    pub fn new(palette: HandlePalette) -> Self {
        Self {
            mode: GizmoMode::default(),
            palette,
            hovered: None,
        }
    }

    /// Currently active mode
    pub fn mode(&self) -> GizmoMode {
        self.mode
    }

    pub(crate) fn set_mode(&mut self, mode: GizmoMode) {
        self.mode = mode;
    }

    /// The one handle-set that is visible and pickable
    pub fn visible_set(&self) -> GizmoMode {
        self.mode
    }

    /// Whether a pick result refers to one of the gizmo's handles
    pub fn is_handle(&self, pick: &PickTarget) -> bool {
        matches!(pick, PickTarget::Handle(_))
    }

    /// Update the hover highlight; every other axis reverts to its normal
    /// color
    pub fn set_hovered(&mut self, axis: Option<GizmoAxis>) {
        self.hovered = axis;
    }

    /// Axis currently highlighted, if any
    pub fn hovered(&self) -> Option<GizmoAxis> {
        self.hovered
    }

    /// Color the renderer should bind for an axis handle right now
    pub fn color_of(&self, axis: GizmoAxis) -> [f32; 4] {
        if self.hovered == Some(axis) {
            self.palette.highlight
        } else {
            self.palette.axis_color(axis)
        }
    }

    pub fn palette(&self) -> &HandlePalette {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn default_mode_is_translate() {
        let state = ModeState::default();
        assert_eq!(state.mode(), GizmoMode::Translate);
        assert_eq!(state.visible_set(), GizmoMode::Translate);
    }

    #[test]
    fn visible_set_follows_mode() {
        let mut state = ModeState::default();
        state.set_mode(GizmoMode::Scale);
        assert_eq!(state.visible_set(), GizmoMode::Scale);
    }

    #[test]
    fn handles_are_classified() {
        let state = ModeState::default();
        assert!(state.is_handle(&PickTarget::Handle(GizmoAxis::Y)));
        assert!(!state.is_handle(&PickTarget::Object {
            id: Uuid::new_v4(),
            pose: Some(Mat4::IDENTITY),
        }));
    }

    #[test]
    fn hover_swaps_exactly_one_color() {
        let mut state = ModeState::default();
        state.set_hovered(Some(GizmoAxis::Y));
        assert_eq!(state.color_of(GizmoAxis::Y), state.palette().highlight);
        assert_eq!(state.color_of(GizmoAxis::X), state.palette().x_axis);
        assert_eq!(state.color_of(GizmoAxis::Z), state.palette().z_axis);

        state.set_hovered(None);
        assert_eq!(state.color_of(GizmoAxis::Y), state.palette().y_axis);
    }
}
