//! Shared scene stub for interaction tests

use glam::{Vec2, Vec3};

use crate::scene::{PickTarget, SceneView};

/// Orthographic test scene.
///
/// The camera sits on the view axis (+Z by default) looking at the world
/// origin; world X maps to screen-right and world Y to screen-up. Projection
/// uses a fixed pixel density, and `meters_per_pixel` is a settable value so
/// tests can force pathological conversions.
pub struct OrthoScene {
    pub camera: Vec3,
    pub viewport: (f32, f32),
    pub pixels_per_meter: f32,
    pub meters_per_pixel: f32,
    pub next_pick: Option<PickTarget>,
    pub controls_enabled: bool,
}

impl OrthoScene {
    pub fn new() -> Self {
        Self {
            camera: Vec3::new(0.0, 0.0, 10.0),
            viewport: (800.0, 600.0),
            pixels_per_meter: 100.0,
            meters_per_pixel: 0.01,
            next_pick: None,
            controls_enabled: true,
        }
    }

    /// Screen position of the world origin
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.viewport.0 / 2.0, self.viewport.1 / 2.0)
    }
}

impl SceneView for OrthoScene {
    fn pick(&self, _screen: Vec2) -> Option<PickTarget> {
        self.next_pick
    }

    fn world_to_screen(&self, world: Vec3) -> Option<Vec2> {
        let view_dir = Vec3::new(0.0, 0.0, -self.camera.z.signum());
        if (world - self.camera).dot(view_dir) <= 0.0 {
            return None;
        }
        Some(self.center() + Vec2::new(world.x, -world.y) * self.pixels_per_meter)
    }

    fn meters_per_pixel(
        &self,
        _world: Vec3,
        _reference_radius: f32,
        _viewport_width: f32,
        _viewport_height: f32,
    ) -> f32 {
        self.meters_per_pixel
    }

    fn camera_position(&self) -> Vec3 {
        self.camera
    }

    fn viewport_size(&self) -> (f32, f32) {
        self.viewport
    }

    fn set_camera_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
    }
}
