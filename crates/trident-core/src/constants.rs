//! Named default values for the interaction core
//!
//! This module centralizes the magic numbers used across the crate so hosts
//! can see (and configs can override) every tuning value in one place.

/// Drag interaction constants
pub mod drag {
    /// On-screen length the widget is held at, in pixels
    pub const SCREEN_LENGTH_PX: f32 = 250.0;
    /// Pixels of axis-aligned drag per unit change of the scale factor.
    /// An empirical tuning value, not a physical conversion.
    pub const SCALE_SENSITIVITY: f32 = 10.0;
    /// Shortest usable screen projection of a world axis, in pixels
    pub const MIN_SCREEN_AXIS: f32 = 1e-3;
}

/// Screen-constant sizing constants
pub mod framing {
    /// Reference bounding radius for pixel-size queries
    pub const REFERENCE_RADIUS: f32 = 1.0;
}

/// Default handle colors
pub mod colors {
    /// X-axis color (red); alpha stays below 1.0 so handles draw in the
    /// renderer's translucent pass
    pub const X_AXIS: [f32; 4] = [1.0, 0.0, 0.0, 0.99];
    /// Y-axis color (green)
    pub const Y_AXIS: [f32; 4] = [0.0, 1.0, 0.0, 0.99];
    /// Z-axis color (blue)
    pub const Z_AXIS: [f32; 4] = [0.0, 0.0, 1.0, 0.99];
    /// Hover highlight color (yellow)
    pub const HIGHLIGHT: [f32; 4] = [1.0, 1.0, 0.0, 0.99];
}
