//! Coordinate and geometry types shared across the scene, renderers and the dial.
//!
//! Canonical CPU space:
//! - Logical units (the dial works on a 600×600 canvas)
//! - Origin top-left
//! - +X right, +Y down
//! - Positive angles rotate clockwise (screen convention, +Y down)
//!
//! Renderers convert to NDC in shaders using a viewport uniform.

mod rect;
mod vec2;
mod viewbox;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewbox::ViewBox;
pub use viewport::Viewport;
