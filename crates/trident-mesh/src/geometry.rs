//! Handle geometry generation
//!
//! Each handle-set is generated along the local +Y axis and rotated into
//! place per axis, so the shaft/cone/torus math exists once.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Mat3, Vec3};
use trident_core::{GizmoAxis, HandlePalette};

use crate::config::HandleMeshConfig;
use crate::constants::{arrow, ring, scale_box};
use crate::vertex::HandleVertex;

/// Indexed triangle mesh for one handle-set
#[derive(Debug, Clone, Default)]
pub struct HandleMesh {
    pub vertices: Vec<HandleVertex>,
    pub indices: Vec<u32>,
}

impl HandleMesh {
    fn push_vertex(&mut self, position: Vec3, color: [f32; 4], axis_id: u32) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices
            .push(HandleVertex::new(position.into(), color, axis_id));
        index
    }

    fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }
}

/// Rotation taking the local +Y axis onto `axis`
fn axis_frame(axis: GizmoAxis) -> Mat3 {
    match axis {
        GizmoAxis::X => Mat3::from_rotation_z(-FRAC_PI_2),
        GizmoAxis::Y => Mat3::IDENTITY,
        GizmoAxis::Z => Mat3::from_rotation_x(FRAC_PI_2),
    }
}

/// Translation handle-set: an arrow (shaft + cone head) per axis
pub fn translation_handles(palette: &HandlePalette, config: &HandleMeshConfig) -> HandleMesh {
    let mut mesh = HandleMesh::default();
    for axis in GizmoAxis::ALL {
        let frame = axis_frame(axis);
        let color = palette.axis_color(axis);
        let id = axis.index();
        push_cylinder(
            &mut mesh,
            frame,
            0.0,
            arrow::SHAFT_LENGTH,
            arrow::SHAFT_RADIUS,
            config.segments,
            color,
            id,
        );
        push_cone(
            &mut mesh,
            frame,
            arrow::SHAFT_LENGTH,
            arrow::SHAFT_LENGTH + arrow::HEAD_LENGTH,
            arrow::HEAD_RADIUS,
            config.segments,
            color,
            id,
        );
    }
    mesh
}

/// Rotation handle-set: a thin torus per axis, ring normal on the axis
pub fn rotation_handles(palette: &HandlePalette, config: &HandleMeshConfig) -> HandleMesh {
    let mut mesh = HandleMesh::default();
    for axis in GizmoAxis::ALL {
        let frame = axis_frame(axis);
        let color = palette.axis_color(axis);
        push_torus(
            &mut mesh,
            frame,
            ring::RADIUS,
            ring::TUBE_RADIUS,
            config.ring_segments,
            config.ring_tube_segments,
            color,
            axis.index(),
        );
    }
    mesh
}

/// Scale handle-set: a shaft with a cube at its end per axis
pub fn scale_handles(palette: &HandlePalette, config: &HandleMeshConfig) -> HandleMesh {
    let mut mesh = HandleMesh::default();
    for axis in GizmoAxis::ALL {
        let frame = axis_frame(axis);
        let color = palette.axis_color(axis);
        let id = axis.index();
        push_cylinder(
            &mut mesh,
            frame,
            0.0,
            arrow::SHAFT_LENGTH,
            arrow::SHAFT_RADIUS,
            config.segments,
            color,
            id,
        );
        push_box(
            &mut mesh,
            frame,
            Vec3::new(0.0, arrow::SHAFT_LENGTH, 0.0),
            scale_box::EDGE / 2.0,
            color,
            id,
        );
    }
    mesh
}

#[allow(clippy::too_many_arguments)]
fn push_cylinder(
    mesh: &mut HandleMesh,
    frame: Mat3,
    y0: f32,
    y1: f32,
    radius: f32,
    segments: u32,
    color: [f32; 4],
    axis_id: u32,
) {
    let base = mesh.vertices.len() as u32;
    for i in 0..=segments {
        let angle = (i as f32 / segments as f32) * TAU;
        let x = angle.cos() * radius;
        let z = angle.sin() * radius;
        mesh.push_vertex(frame * Vec3::new(x, y0, z), color, axis_id);
        mesh.push_vertex(frame * Vec3::new(x, y1, z), color, axis_id);
    }
    for i in 0..segments {
        let i0 = base + i * 2;
        let i1 = i0 + 1;
        let i2 = base + (i + 1) * 2;
        let i3 = i2 + 1;
        mesh.push_triangle(i0, i2, i1);
        mesh.push_triangle(i1, i2, i3);
    }
}

#[allow(clippy::too_many_arguments)]
fn push_cone(
    mesh: &mut HandleMesh,
    frame: Mat3,
    y_base: f32,
    y_tip: f32,
    radius: f32,
    segments: u32,
    color: [f32; 4],
    axis_id: u32,
) {
    let tip = mesh.push_vertex(frame * Vec3::new(0.0, y_tip, 0.0), color, axis_id);
    let ring_base = mesh.vertices.len() as u32;
    for i in 0..=segments {
        let angle = (i as f32 / segments as f32) * TAU;
        let x = angle.cos() * radius;
        let z = angle.sin() * radius;
        mesh.push_vertex(frame * Vec3::new(x, y_base, z), color, axis_id);
    }
    for i in 0..segments {
        let i0 = ring_base + i;
        let i1 = ring_base + i + 1;
        mesh.push_triangle(tip, i1, i0);
    }
    // Base cap
    let center = mesh.push_vertex(frame * Vec3::new(0.0, y_base, 0.0), color, axis_id);
    for i in 0..segments {
        let i0 = ring_base + i;
        let i1 = ring_base + i + 1;
        mesh.push_triangle(center, i0, i1);
    }
}

#[allow(clippy::too_many_arguments)]
fn push_torus(
    mesh: &mut HandleMesh,
    frame: Mat3,
    radius: f32,
    tube_radius: f32,
    segments: u32,
    tube_segments: u32,
    color: [f32; 4],
    axis_id: u32,
) {
    let base = mesh.vertices.len() as u32;
    for i in 0..=segments {
        let u = (i as f32 / segments as f32) * TAU;
        let ring_dir = Vec3::new(u.cos(), 0.0, u.sin());
        for j in 0..=tube_segments {
            let v = (j as f32 / tube_segments as f32) * TAU;
            let offset = ring_dir * (v.cos() * tube_radius) + Vec3::Y * (v.sin() * tube_radius);
            let position = ring_dir * radius + offset;
            mesh.push_vertex(frame * position, color, axis_id);
        }
    }
    let stride = tube_segments + 1;
    for i in 0..segments {
        for j in 0..tube_segments {
            let i0 = base + i * stride + j;
            let i1 = i0 + 1;
            let i2 = base + (i + 1) * stride + j;
            let i3 = i2 + 1;
            mesh.push_triangle(i0, i2, i1);
            mesh.push_triangle(i1, i2, i3);
        }
    }
}

fn push_box(
    mesh: &mut HandleMesh,
    frame: Mat3,
    center: Vec3,
    half: f32,
    color: [f32; 4],
    axis_id: u32,
) {
    let base = mesh.vertices.len() as u32;
    for dz in [-half, half] {
        for dy in [-half, half] {
            for dx in [-half, half] {
                mesh.push_vertex(frame * (center + Vec3::new(dx, dy, dz)), color, axis_id);
            }
        }
    }
    // Corner order: x fastest, then y, then z
    const FACES: [[u32; 4]; 6] = [
        [0, 1, 3, 2], // -z
        [4, 6, 7, 5], // +z
        [0, 4, 5, 1], // -y
        [2, 3, 7, 6], // +y
        [0, 2, 6, 4], // -x
        [1, 5, 7, 3], // +x
    ];
    for face in FACES {
        mesh.push_triangle(base + face[0], base + face[1], base + face[2]);
        mesh.push_triangle(base + face[0], base + face[2], base + face[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> HandlePalette {
        HandlePalette::default()
    }

    fn assert_indices_in_bounds(mesh: &HandleMesh) {
        let count = mesh.vertices.len() as u32;
        assert!(!mesh.indices.is_empty());
        assert_eq!(mesh.indices.len() % 3, 0);
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    fn axis_ids(mesh: &HandleMesh) -> Vec<u32> {
        let mut ids: Vec<u32> = mesh.vertices.iter().map(|v| v.axis_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    #[test]
    fn translation_arrows_cover_all_axes() {
        let mesh = translation_handles(&palette(), &HandleMeshConfig::default());
        assert_indices_in_bounds(&mesh);
        assert_eq!(axis_ids(&mesh), vec![0, 1, 2]);
    }

    #[test]
    fn arrows_span_unit_length() {
        let mesh = translation_handles(&palette(), &HandleMeshConfig::default());
        let max_y = mesh
            .vertices
            .iter()
            .filter(|v| v.axis_id == GizmoAxis::Y.index())
            .map(|v| v.position[1])
            .fold(f32::MIN, f32::max);
        assert!((max_y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn vertices_carry_their_axis_color() {
        let palette = palette();
        let mesh = translation_handles(&palette, &HandleMeshConfig::default());
        for v in &mesh.vertices {
            let expected = match v.axis_id {
                0 => palette.x_axis,
                1 => palette.y_axis,
                2 => palette.z_axis,
                other => panic!("unexpected axis id {other}"),
            };
            assert_eq!(v.color, expected);
        }
    }

    #[test]
    fn rotation_rings_lie_in_their_planes() {
        let mesh = rotation_handles(&palette(), &HandleMeshConfig::default());
        assert_indices_in_bounds(&mesh);
        assert_eq!(axis_ids(&mesh), vec![0, 1, 2]);
        // The X ring's vertices stay within a tube radius of the YZ plane
        for v in mesh.vertices.iter().filter(|v| v.axis_id == 0) {
            assert!(v.position[0].abs() <= ring::TUBE_RADIUS + 1e-5);
        }
        // And sit at ring radius from the axis
        for v in mesh.vertices.iter().filter(|v| v.axis_id == 0) {
            let planar = (v.position[1].powi(2) + v.position[2].powi(2)).sqrt();
            assert!((planar - ring::RADIUS).abs() <= ring::TUBE_RADIUS + 1e-5);
        }
    }

    #[test]
    fn scale_boxes_sit_at_shaft_ends() {
        let mesh = scale_handles(&palette(), &HandleMeshConfig::default());
        assert_indices_in_bounds(&mesh);
        let max_x = mesh
            .vertices
            .iter()
            .filter(|v| v.axis_id == GizmoAxis::X.index())
            .map(|v| v.position[0])
            .fold(f32::MIN, f32::max);
        assert!((max_x - (arrow::SHAFT_LENGTH + scale_box::EDGE / 2.0)).abs() < 1e-5);
    }

    #[test]
    fn tessellation_config_changes_vertex_count() {
        let coarse = HandleMeshConfig {
            segments: 8,
            ring_segments: 16,
            ring_tube_segments: 4,
        };
        let fine = HandleMeshConfig::default();
        let coarse_mesh = rotation_handles(&palette(), &coarse);
        let fine_mesh = rotation_handles(&palette(), &fine);
        assert!(coarse_mesh.vertices.len() < fine_mesh.vertices.len());
    }
}
