//! Handle mesh generation for the trident transform gizmo.
//!
//! Builds the CPU-side indexed triangle meshes for the three handle-sets
//! (arrows for translate, rings for rotate, boxes for scale), with every
//! vertex tagged by its axis so renderers can pick and highlight per axis.
//! Uploading the buffers and swapping highlight colors stays with the
//! renderer; colors come from the core crate's [`HandlePalette`].
//!
//! [`HandlePalette`]: trident_core::HandlePalette

pub mod config;
pub mod constants;
pub mod geometry;
pub mod vertex;

pub use config::HandleMeshConfig;
pub use geometry::{HandleMesh, rotation_handles, scale_handles, translation_handles};
pub use vertex::HandleVertex;
