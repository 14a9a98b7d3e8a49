//! GPU rendering subsystem.
//!
//! The scene is tessellated on the CPU into a single triangle list (all
//! transforms and shared rotations resolved), then drawn by one wgpu pipeline.
//!
//! Convention:
//! - Scene geometry is in canvas units; a `ViewBox` maps it to logical pixels.
//! - Vertex shader converts logical pixels to NDC using a viewport uniform.

mod common;
mod ctx;
mod mesh;
mod tessellate;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
pub use tessellate::{segments_for_radius, tessellate, Mesh, MeshVertex};
