use chrono::{NaiveTime, Timelike};

use dbclock_engine::scene::{DrawList, RotationId};

use crate::angles::HandAngles;

/// The three rotating parts of the face.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Hand {
    Hour,
    Minute,
    /// All three seconds-hand parts share one rotation.
    Second,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];
}

/// A built clock face: its primitives plus the shared hand rotations.
///
/// The primitive list is fixed at construction; updates only write rotation
/// slots.
#[derive(Debug, Clone)]
pub struct Dial {
    list: DrawList,
    hour: RotationId,
    minute: RotationId,
    second: RotationId,
    /// Last time passed to `set_time`, used to drop no-op updates.
    shown: Option<NaiveTime>,
}

impl Dial {
    pub(crate) fn new(list: DrawList, hour: RotationId, minute: RotationId, second: RotationId) -> Self {
        Self { list, hour, minute, second, shown: None }
    }

    /// Primitives in paint order.
    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }

    #[inline]
    pub fn rotation_id(&self, hand: Hand) -> RotationId {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }

    /// Current angle of `hand`, in degrees.
    #[inline]
    pub fn rotation(&self, hand: Hand) -> f32 {
        self.list.rotations().degrees(self.rotation_id(hand))
    }

    /// Rotates `hand` to `degrees` (unbounded, clockwise from 12 o'clock).
    #[inline]
    pub fn set_rotation(&mut self, hand: Hand, degrees: f32) {
        self.list.set_rotation(self.rotation_id(hand), degrees);
    }

    /// Applies all three angles at once.
    pub fn set_angles(&mut self, angles: HandAngles) {
        self.set_rotation(Hand::Hour, angles.hour);
        self.set_rotation(Hand::Minute, angles.minute);
        self.set_rotation(Hand::Second, angles.second);
    }

    /// Shows time of day `t`.
    ///
    /// Returns `false` without touching the rotations when `t` equals the time
    /// shown last.
    pub fn set_time<T: Timelike>(&mut self, t: &T) -> bool {
        let Some(time) = NaiveTime::from_hms_nano_opt(t.hour(), t.minute(), t.second(), t.nanosecond())
        else {
            return false;
        };
        if self.shown == Some(time) {
            return false;
        }

        self.set_angles(HandAngles::from_time(&time));
        self.shown = Some(time);
        true
    }

    /// Time last applied with [`Dial::set_time`].
    #[inline]
    pub fn shown_time(&self) -> Option<NaiveTime> {
        self.shown
    }
}
