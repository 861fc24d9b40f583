//! Screen-constant sizing of the widget
//!
//! Recomputed once per render tick, independent of pointer handling: it
//! reads the gizmo's pose and mode but never writes drag state.

use glam::{Mat4, Vec3};

use crate::constants::framing::REFERENCE_RADIUS;
use crate::mode::GizmoMode;
use crate::scene::SceneView;

/// Uniform scale that keeps a widget of unit radius at `pixel_length`
/// pixels on screen.
///
/// When the projected diameter (clamped to the larger viewport dimension)
/// would fall below `pixel_length`, the widget is grown to compensate;
/// otherwise it renders at its natural size.
pub fn scale_for_screen_size<S: SceneView>(scene: &S, pose: &Mat4, pixel_length: f32) -> f32 {
    let position = pose.w_axis.truncate();
    let (width, height) = scene.viewport_size();
    let meters_per_pixel = scene.meters_per_pixel(position, REFERENCE_RADIUS, width, height);
    if !meters_per_pixel.is_finite() || meters_per_pixel <= 0.0 {
        return 1.0;
    }

    let pixels_per_meter = 1.0 / meters_per_pixel;
    let max_pixel_size = width.max(height);
    let diameter_pixels = (pixels_per_meter * 2.0 * REFERENCE_RADIUS).min(max_pixel_size);

    if diameter_pixels < pixel_length {
        pixel_length * meters_per_pixel / (2.0 * REFERENCE_RADIUS)
    } else {
        1.0
    }
}

/// Placement matrix for the visible handle-set.
///
/// Translate handles stay world-aligned in the reference frame at the gizmo
/// origin; rotate and scale handles follow the gizmo's full pose. Both are
/// uniformly scaled by the screen-size factor.
pub fn handle_placement<S: SceneView>(
    scene: &S,
    mode: GizmoMode,
    pose: &Mat4,
    scale: f32,
) -> Mat4 {
    let base = match mode {
        GizmoMode::Translate => scene.reference_frame(pose.w_axis.truncate()),
        GizmoMode::Rotate | GizmoMode::Scale => *pose,
    };
    base * Mat4::from_scale(Vec3::splat(scale))
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;
    use crate::testing::OrthoScene;

    #[test]
    fn small_widget_grows_to_pixel_length() {
        let scene = OrthoScene::new();
        // 100 px/m puts a unit-radius widget at 200 px, under the 250 px
        // floor
        let scale = scale_for_screen_size(&scene, &Mat4::IDENTITY, 250.0);
        assert!((scale - 1.25).abs() < 1e-5);
    }

    #[test]
    fn large_widget_keeps_natural_size() {
        let mut scene = OrthoScene::new();
        scene.meters_per_pixel = 0.001;
        let scale = scale_for_screen_size(&scene, &Mat4::IDENTITY, 250.0);
        assert_eq!(scale, 1.0);
    }

    #[test]
    fn bad_pixel_size_falls_back_to_unit_scale() {
        let mut scene = OrthoScene::new();
        scene.meters_per_pixel = f32::INFINITY;
        assert_eq!(scale_for_screen_size(&scene, &Mat4::IDENTITY, 250.0), 1.0);
    }

    #[test]
    fn translate_handles_ignore_gizmo_rotation() {
        let scene = OrthoScene::new();
        let pose = Mat4::from_rotation_translation(
            Quat::from_rotation_z(1.0),
            Vec3::new(1.0, 2.0, 3.0),
        );
        let placement = handle_placement(&scene, GizmoMode::Translate, &pose, 2.0);
        let (scale, rotation, translation) = placement.to_scale_rotation_translation();
        assert!((translation - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
        assert!(rotation.angle_between(Quat::IDENTITY) < 1e-5);
        assert!((scale - Vec3::splat(2.0)).length() < 1e-5);
    }

    #[test]
    fn rotate_handles_follow_gizmo_pose() {
        let scene = OrthoScene::new();
        let rotation = Quat::from_rotation_z(1.0);
        let pose = Mat4::from_rotation_translation(rotation, Vec3::ZERO);
        let placement = handle_placement(&scene, GizmoMode::Rotate, &pose, 1.0);
        let (_, placed_rotation, _) = placement.to_scale_rotation_translation();
        assert!(placed_rotation.angle_between(rotation) < 1e-5);
    }
}
