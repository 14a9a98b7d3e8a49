//! Time subsystem.
//!
//! Provides stable, testable timing utilities without coupling to the runtime:
//! - `TimeSource`: pluggable wall-clock sampling (system clock or a manual fake)
//! - `Movement`: turns a wall clock that only matters once per second into
//!   second-aligned `Tick`s using a fast and a slow polling interval

mod movement;
mod source;

pub use movement::{
    IntervalMode, Movement, MovementConfig, MovementState, Tick, DEFAULT_IDLE_UPDATE,
    DEFAULT_RESOLUTION,
};
pub use source::{ManualTimeSource, SystemTimeSource, TimeSource};
