//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands with their local transforms
//! - own the table of shared rotations that transforms may reference
//! - keep paint order equal to insertion order
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;
mod rotation;
mod transform;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use rotation::{RotationId, RotationTable};
pub use shapes::Border;
pub use transform::{Rotation, Transform};
