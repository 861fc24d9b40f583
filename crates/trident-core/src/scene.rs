//! Renderer/scene collaborator interface

use glam::{Mat4, Vec2, Vec3};
use uuid::Uuid;

use crate::axis::GizmoAxis;

/// Result of a pick query against the rendered scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickTarget {
    /// One of the gizmo's own axis handles
    Handle(GizmoAxis),
    /// A scene object; `pose` is present when the object can be manipulated
    Object { id: Uuid, pose: Option<Mat4> },
}

/// What the interaction core needs from the hosting renderer/scene.
///
/// All queries are synchronous and run on the render thread. Screen
/// coordinates are viewport pixels with the origin in the top-left corner
/// and y growing downward.
pub trait SceneView {
    /// Hit-test the rendered scene at a screen point
    fn pick(&self, screen: Vec2) -> Option<PickTarget>;

    /// Project a world point to screen coordinates.
    ///
    /// Returns `None` when the projection is undefined (point behind the
    /// camera); callers must not receive a silently bad value.
    fn world_to_screen(&self, world: Vec3) -> Option<Vec2>;

    /// Meters covered by one pixel at `world`, for a bounding sphere of
    /// `reference_radius`
    fn meters_per_pixel(
        &self,
        world: Vec3,
        reference_radius: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> f32;

    /// Camera position in world coordinates
    fn camera_position(&self) -> Vec3;

    /// Viewport size in pixels
    fn viewport_size(&self) -> (f32, f32);

    /// Enable or disable the scene's default camera-drag controls
    fn set_camera_controls_enabled(&mut self, enabled: bool);

    /// Reference frame with world-aligned axes at `world`.
    ///
    /// Rotation deltas are composed onto the target in this frame, and
    /// translate handles are drawn in it. Globe-style renderers override it
    /// with their local-up frame (east-north-up at the point).
    fn reference_frame(&self, world: Vec3) -> Mat4 {
        Mat4::from_translation(world)
    }
}
