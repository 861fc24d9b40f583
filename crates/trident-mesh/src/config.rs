//! Mesh generation configuration

use serde::{Deserialize, Serialize};

use crate::constants::tessellation;

/// Tessellation settings for handle meshes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandleMeshConfig {
    /// Segments around cylindrical geometry (shafts, cone heads)
    pub segments: u32,
    /// Segments around the ring circumference
    pub ring_segments: u32,
    /// Segments around the ring tube cross-section
    pub ring_tube_segments: u32,
}

impl Default for HandleMeshConfig {
    fn default() -> Self {
        Self {
            segments: tessellation::SEGMENTS,
            ring_segments: tessellation::RING_SEGMENTS,
            ring_tube_segments: tessellation::RING_TUBE_SEGMENTS,
        }
    }
}
