//! Handle geometry proportions
//!
//! All dimensions are in the gizmo's unit-length local frame; the
//! screen-constant placement matrix scales the whole widget at draw time.

/// Translate/scale arrow dimensions
pub mod arrow {
    /// Shaft length
    pub const SHAFT_LENGTH: f32 = 0.8;
    /// Shaft radius
    pub const SHAFT_RADIUS: f32 = 0.01;
    /// Head length
    pub const HEAD_LENGTH: f32 = 0.2;
    /// Head base radius
    pub const HEAD_RADIUS: f32 = 0.06;
}

/// Rotation ring dimensions
pub mod ring {
    /// Ring radius
    pub const RADIUS: f32 = 1.0;
    /// Tube radius of the ring cross-section
    pub const TUBE_RADIUS: f32 = 0.02;
}

/// Scale box dimensions
pub mod scale_box {
    /// Edge length of the cube at each shaft end
    pub const EDGE: f32 = 0.1;
}

/// Default tessellation
pub mod tessellation {
    /// Segments around cylindrical geometry
    pub const SEGMENTS: u32 = 16;
    /// Segments around the ring circumference
    pub const RING_SEGMENTS: u32 = 64;
    /// Segments around the ring tube cross-section
    pub const RING_TUBE_SEGMENTS: u32 = 8;
}
