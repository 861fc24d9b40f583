//! Drag-path error taxonomy

/// Reasons a drag frame's update is skipped.
///
/// None of these reach the host as a failure: the interaction layer logs the
/// condition, discards the frame's update, and keeps the previous valid pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    /// A world axis projected to a zero-length screen vector (axis pointing
    /// at the camera), or a projection was undefined (point behind camera).
    #[error("axis projects to a degenerate screen direction")]
    DegenerateProjection,
    /// A computed pose component came out NaN or infinite.
    #[error("computed transform contains a non-finite component")]
    NonFiniteResult,
    /// A drag-continuation event arrived with no active drag snapshot.
    #[error("drag event without an active drag")]
    StaleDragState,
}
