//! Screen-space drag math
//!
//! Pure functions mapping a 2D pointer drag to a translation vector, a
//! rotation about one axis, or a per-axis scale factor. Everything here is
//! stateless given its inputs; the [`DragSnapshot`] carries the frozen
//! starting state all deltas are measured against.

use glam::{Mat3, Mat4, Vec2, Vec3};

use crate::axis::GizmoAxis;
use crate::constants::drag::MIN_SCREEN_AXIS;
use crate::error::DragError;
use crate::scene::SceneView;

/// Frozen starting state captured on pointer-down over a handle.
///
/// Lives for the duration of one drag. Translation and scale are always
/// recomputed against it; rotation refreshes the pose fields per event so
/// per-frame angle deltas compose without drift.
#[derive(Debug, Clone, Copy)]
pub struct DragSnapshot {
    /// Pointer screen position at drag start
    pub pointer: Vec2,
    /// Gizmo world position at drag start
    pub origin: Vec3,
    /// Gizmo pose at drag start
    pub gizmo_pose: Mat4,
    /// Target pose at drag start
    pub target_pose: Mat4,
}

impl DragSnapshot {
    /// Capture a snapshot from the current poses
    pub fn capture(pointer: Vec2, gizmo_pose: Mat4, target_pose: Mat4) -> Self {
        Self {
            pointer,
            origin: gizmo_pose.w_axis.truncate(),
            gizmo_pose,
            target_pose,
        }
    }
}

/// Unit direction of a local axis in world space, per the pose's
/// rotation+scale block
fn axis_direction_world(pose: &Mat4, axis: GizmoAxis) -> Result<Vec3, DragError> {
    let v = pose.transform_vector3(axis.direction());
    let len = v.length();
    if !len.is_finite() || len <= f32::EPSILON {
        return Err(DragError::DegenerateProjection);
    }
    Ok(v / len)
}

/// Screen-space direction of a world axis through the gizmo origin.
///
/// Projects the origin and origin+axis and subtracts. A zero-length screen
/// vector means the axis points at the camera and the drag distance along it
/// is undefined for this frame.
fn screen_axis<S: SceneView>(
    axis: GizmoAxis,
    snapshot: &DragSnapshot,
    scene: &S,
) -> Result<(Vec3, Vec2), DragError> {
    let axis_world = axis_direction_world(&snapshot.gizmo_pose, axis)?;
    let origin = scene
        .world_to_screen(snapshot.origin)
        .ok_or(DragError::DegenerateProjection)?;
    let end = scene
        .world_to_screen(snapshot.origin + axis_world)
        .ok_or(DragError::DegenerateProjection)?;
    let axis_screen = end - origin;
    if axis_screen.length_squared() <= MIN_SCREEN_AXIS * MIN_SCREEN_AXIS {
        return Err(DragError::DegenerateProjection);
    }
    Ok((axis_world, axis_screen))
}

/// Signed pixel distance of a pointer delta along a screen-space axis
fn pixels_along_axis(axis_screen: Vec2, pointer_delta: Vec2) -> f32 {
    pointer_delta.dot(axis_screen) / axis_screen.length()
}

/// +1 for non-negative values, -1 otherwise
fn sign_not_zero(v: f32) -> f32 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// World translation for a pointer drag along an axis handle.
///
/// The pixel distance along the screen-projected axis is converted to world
/// units with the scene's meters-per-pixel at the gizmo origin. A zero
/// pointer delta yields a zero vector.
pub fn axis_translation<S: SceneView>(
    axis: GizmoAxis,
    snapshot: &DragSnapshot,
    pointer_delta: Vec2,
    scene: &S,
) -> Result<Vec3, DragError> {
    let (axis_world, axis_screen) = screen_axis(axis, snapshot, scene)?;
    let pixels = pixels_along_axis(axis_screen, pointer_delta);
    let (width, height) = scene.viewport_size();
    let meters = scene.meters_per_pixel(snapshot.origin, axis_world.length(), width, height);
    Ok(axis_world * (pixels * meters))
}

/// Rotation about an axis handle for a pointer move.
///
/// The angle is swept between the two pointer positions as seen from the
/// screen projection of the gizmo origin. The sign is the negated 2D cross
/// of the start/end vectors (counter-clockwise near-side drag produces a
/// right-hand rotation), further flipped when the camera sits on the
/// negative side of the axis so the on-screen direction stays consistent
/// from either side of the object.
pub fn axis_rotation<S: SceneView>(
    axis: GizmoAxis,
    snapshot: &DragSnapshot,
    pointer_start: Vec2,
    pointer_end: Vec2,
    scene: &S,
) -> Result<Mat3, DragError> {
    let origin = scene
        .world_to_screen(snapshot.origin)
        .ok_or(DragError::DegenerateProjection)?;
    let start = pointer_start - origin;
    let end = pointer_end - origin;
    if start.length_squared() <= MIN_SCREEN_AXIS * MIN_SCREEN_AXIS
        || end.length_squared() <= MIN_SCREEN_AXIS * MIN_SCREEN_AXIS
    {
        return Err(DragError::DegenerateProjection);
    }

    let drag_angle = -start.perp_dot(end).atan2(start.dot(end));

    let axis_world = axis_direction_world(&snapshot.gizmo_pose, axis)?;
    let camera_side = sign_not_zero(axis_world.dot(scene.camera_position() - snapshot.origin));

    Ok(axis.rotation(drag_angle * camera_side))
}

/// Per-axis scale factors for a pointer drag along an axis handle.
///
/// The pixel distance along the screen-projected axis becomes a
/// dimensionless factor via `pixels / sensitivity + 1.0`; the result is that
/// factor on the dragged axis and 1 elsewhere.
pub fn axis_scale<S: SceneView>(
    axis: GizmoAxis,
    snapshot: &DragSnapshot,
    pointer_delta: Vec2,
    scene: &S,
    sensitivity: f32,
) -> Result<Vec3, DragError> {
    let (_, axis_screen) = screen_axis(axis, snapshot, scene)?;
    let pixels = pixels_along_axis(axis_screen, pointer_delta);
    let factor = pixels / sensitivity + 1.0;
    Ok(axis.scale_vector(factor))
}

/// Gizmo pose with `rotation` composed onto its local frame
pub fn rotated_gizmo_pose(snapshot: &DragSnapshot, rotation: Mat3) -> Mat4 {
    snapshot.gizmo_pose * Mat4::from_mat3(rotation)
}

/// Target pose with `rotation` applied about the gizmo pivot.
///
/// The target's pose is re-expressed in the reference frame at the gizmo
/// origin, its rotation+scale block is composed with the delta, its offset
/// from the pivot is swung by the same delta, and the result is mapped back
/// to world space. A target whose origin coincides with the pivot simply
/// rotates in place; one that doesn't orbits the pivot.
pub fn rotated_target_pose<S: SceneView>(
    snapshot: &DragSnapshot,
    rotation: Mat3,
    scene: &S,
) -> Mat4 {
    let frame = scene.reference_frame(snapshot.origin);
    let local = frame.inverse() * snapshot.target_pose;
    let (scale, local_rotation, offset) = local.to_scale_rotation_translation();
    let composed = Mat3::from_quat(local_rotation) * rotation * Mat3::from_diagonal(scale);
    let mut local_after = Mat4::from_mat3(composed);
    local_after.w_axis = (rotation * offset).extend(1.0);
    frame * local_after
}

/// Target pose scaled from its snapshot by per-axis `factors`
pub fn scaled_target_pose(snapshot: &DragSnapshot, factors: Vec3) -> Mat4 {
    snapshot.target_pose * Mat4::from_scale(factors)
}
