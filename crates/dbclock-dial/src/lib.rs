//! dbclock dial: the analog clock face on top of `dbclock-engine`'s scene.
//!
//! [`FaceBuilder`] turns a [`GeometrySpec`] and a [`Palette`] into a [`Dial`]:
//! a fixed list of 67 primitives on a 600×600 canvas plus three shared
//! rotations (hour, minute, second). After construction only the rotations
//! change.
//!
//! ```rust,ignore
//! use dbclock_dial::prelude::*;
//!
//! let mut dial = FaceBuilder::new().build()?;
//! dial.set_time(chrono::Local::now().naive_local());
//! // hand `dial.draw_list()` to a renderer
//! ```

mod angles;
mod builder;
mod dial;
mod geometry;
mod palette;
mod tick;

pub use angles::HandAngles;
pub use builder::FaceBuilder;
pub use dial::{Dial, Hand};
pub use geometry::{GeometryError, GeometryErrorKind, GeometrySpec, CANVAS_SIZE, CENTER, HALF_EXTENT};
pub use palette::Palette;
pub use tick::{tick_angles, TickDescriptor, TickKind, TICK_COUNT, TICK_STEP_DEGREES};

pub mod prelude {
    pub use crate::{Dial, FaceBuilder, GeometrySpec, Hand, HandAngles, Palette};
}
