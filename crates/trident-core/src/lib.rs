//! Screen-space interaction core for the trident transform gizmo.
//!
//! Converts 2D pointer drags over per-axis handles into translation,
//! rotation, and scale updates for a manipulated object's pose. The crate is
//! renderer-agnostic: everything the math needs from the hosting scene
//! (picking, projection, pixel-size queries, camera position) is reached
//! through the [`SceneView`] trait.
//!
//! # Module structure
//!
//! ```text
//! trident-core/
//! ├── axis.rs         # Axis identifiers and per-axis helpers
//! ├── config.rs       # Tunable interaction parameters
//! ├── constants.rs    # Named default values
//! ├── drag.rs         # Screen-space drag math (pure functions)
//! ├── error.rs        # Frame-skip taxonomy
//! ├── framing.rs      # Screen-constant sizing of the widget
//! ├── interaction.rs  # Pointer state machine (Gizmo)
//! ├── mode.rs         # Manipulation modes and handle visuals
//! └── scene.rs        # Renderer/scene collaborator trait
//! ```

pub mod axis;
pub mod config;
pub mod constants;
pub mod drag;
pub mod error;
pub mod framing;
pub mod interaction;
pub mod mode;
pub mod scene;

#[cfg(test)]
pub(crate) mod testing;

pub use axis::GizmoAxis;
pub use config::GizmoConfig;
pub use drag::DragSnapshot;
pub use error::DragError;
pub use interaction::{Gizmo, GizmoTransform, TargetBinding};
pub use mode::{GizmoMode, HandlePalette, ModeState};
pub use scene::{PickTarget, SceneView};
