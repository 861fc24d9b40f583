//! Manipulation axis identifiers

use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

/// Which handle axis is being manipulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GizmoAxis {
    X,
    Y,
    Z,
}

impl GizmoAxis {
    /// All axes, in index order
    pub const ALL: [GizmoAxis; 3] = [GizmoAxis::X, GizmoAxis::Y, GizmoAxis::Z];

    /// Unit direction in the gizmo's local frame
    pub fn direction(&self) -> Vec3 {
        match self {
            GizmoAxis::X => Vec3::X,
            GizmoAxis::Y => Vec3::Y,
            GizmoAxis::Z => Vec3::Z,
        }
    }

    /// Vertex-stream index of this axis (X=0, Y=1, Z=2)
    pub fn index(&self) -> u32 {
        match self {
            GizmoAxis::X => 0,
            GizmoAxis::Y => 1,
            GizmoAxis::Z => 2,
        }
    }

    /// Rotation about this local axis by `angle` radians
    pub fn rotation(&self, angle: f32) -> Mat3 {
        match self {
            GizmoAxis::X => Mat3::from_rotation_x(angle),
            GizmoAxis::Y => Mat3::from_rotation_y(angle),
            GizmoAxis::Z => Mat3::from_rotation_z(angle),
        }
    }

    /// Scale vector that is `factor` on this axis and 1 on the other two
    pub fn scale_vector(&self, factor: f32) -> Vec3 {
        match self {
            GizmoAxis::X => Vec3::new(factor, 1.0, 1.0),
            GizmoAxis::Y => Vec3::new(1.0, factor, 1.0),
            GizmoAxis::Z => Vec3::new(1.0, 1.0, factor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_are_unit_axes() {
        assert_eq!(GizmoAxis::X.direction(), Vec3::X);
        assert_eq!(GizmoAxis::Y.direction(), Vec3::Y);
        assert_eq!(GizmoAxis::Z.direction(), Vec3::Z);
    }

    #[test]
    fn rotation_spins_about_own_axis() {
        for axis in GizmoAxis::ALL {
            let rot = axis.rotation(0.7);
            let spun = rot * axis.direction();
            assert!((spun - axis.direction()).length() < 1e-6);
        }
    }

    #[test]
    fn scale_vector_touches_one_component() {
        assert_eq!(GizmoAxis::Y.scale_vector(3.0), Vec3::new(1.0, 3.0, 1.0));
        assert_eq!(GizmoAxis::Z.scale_vector(0.5), Vec3::new(1.0, 1.0, 0.5));
    }
}
