//! GPU-facing vertex layout for handle meshes

use bytemuck::{Pod, Zeroable};

/// Handle mesh vertex
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct HandleVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
    /// Axis the vertex belongs to (X=0, Y=1, Z=2), for per-axis picking and
    /// highlight rebinding
    pub axis_id: u32,
}

impl HandleVertex {
    pub fn new(position: [f32; 3], color: [f32; 4], axis_id: u32) -> Self {
        Self {
            position,
            color,
            axis_id,
        }
    }
}
