//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer.
//! The loop sleeps between app-requested wake-ups instead of redrawing
//! continuously.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
