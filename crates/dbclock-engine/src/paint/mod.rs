//! Paint model shared between the scene and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - parsing of hex color literals used by configuration
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::{Color, ColorParseError};
