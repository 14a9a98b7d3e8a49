//! dbclock engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the clock, plus the
//! renderer-agnostic scene and the second-aligned movement scheduler.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
