use std::fmt;

use dbclock_engine::coords::Vec2;

/// Side of the square canvas every constant is scaled to.
pub const CANVAS_SIZE: f32 = 600.0;

/// Largest distance from the center a face element may reach.
pub const HALF_EXTENT: f32 = CANVAS_SIZE / 2.0;

/// Pivot of every hand and tick.
pub const CENTER: Vec2 = Vec2::new(HALF_EXTENT, HALF_EXTENT);

/// Proportions of the clock face, in canvas units.
///
/// Widths are full widths; each element is centered on the vertical axis
/// through [`CENTER`] before being rotated into place.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeometrySpec {
    /// Backdrop disc. Allowed to bleed past the canvas edge.
    pub dial_diameter: f32,

    pub main_hour_tick_width: f32,
    pub main_hour_tick_height: f32,
    pub small_hour_tick_width: f32,
    pub small_hour_tick_height: f32,
    pub minute_tick_width: f32,
    pub minute_tick_height: f32,

    pub minute_hand_length: f32,
    pub minute_hand_width: f32,
    pub hour_hand_length: f32,
    pub hour_hand_width: f32,

    pub central_disc_diameter: f32,

    /// Distance from the center to the middle of the seconds-hand ring.
    pub second_circle_center_offset: f32,
    pub second_circle_diameter: f32,
    /// Seconds-hand width at the outer tip.
    pub second_hand_width0: f32,
    /// Seconds-hand width where it meets the ring; also the ring stroke.
    pub second_hand_width1: f32,
    /// Seconds-hand width at the center.
    pub second_hand_width2: f32,
}

impl Default for GeometrySpec {
    fn default() -> Self {
        Self {
            dial_diameter: 632.0,

            main_hour_tick_width: 24.0,
            main_hour_tick_height: 94.0,
            small_hour_tick_width: 24.0,
            small_hour_tick_height: 74.0,
            minute_tick_width: 10.0,
            minute_tick_height: 24.0,

            minute_hand_length: 284.0,
            minute_hand_width: 24.0,
            hour_hand_length: 184.0,
            hour_hand_width: 34.0,

            central_disc_diameter: 64.0,

            second_circle_center_offset: 174.0,
            second_circle_diameter: 60.0,
            second_hand_width0: 4.0,
            second_hand_width1: 8.0,
            second_hand_width2: 16.0,
        }
    }
}

impl GeometrySpec {
    /// Checks the invariants the face builder relies on.
    ///
    /// Every constant must be finite and non-negative. Everything except the
    /// dial disc must stay within [`HALF_EXTENT`] of the center. Fields are
    /// checked in declaration order and the first violation is reported.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for (field, value) in self.fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(GeometryError::new(field, value, GeometryErrorKind::NegativeOrNonFinite));
            }
        }

        for (field, reach) in self.reaches() {
            if reach > HALF_EXTENT {
                return Err(GeometryError::new(field, reach, GeometryErrorKind::ExceedsHalfExtent));
            }
        }

        Ok(())
    }

    fn fields(&self) -> [(&'static str, f32); 17] {
        [
            ("dial_diameter", self.dial_diameter),
            ("main_hour_tick_width", self.main_hour_tick_width),
            ("main_hour_tick_height", self.main_hour_tick_height),
            ("small_hour_tick_width", self.small_hour_tick_width),
            ("small_hour_tick_height", self.small_hour_tick_height),
            ("minute_tick_width", self.minute_tick_width),
            ("minute_tick_height", self.minute_tick_height),
            ("minute_hand_length", self.minute_hand_length),
            ("minute_hand_width", self.minute_hand_width),
            ("hour_hand_length", self.hour_hand_length),
            ("hour_hand_width", self.hour_hand_width),
            ("central_disc_diameter", self.central_disc_diameter),
            ("second_circle_center_offset", self.second_circle_center_offset),
            ("second_circle_diameter", self.second_circle_diameter),
            ("second_hand_width0", self.second_hand_width0),
            ("second_hand_width1", self.second_hand_width1),
            ("second_hand_width2", self.second_hand_width2),
        ]
    }

    /// Distance from the center each constrained field reaches.
    fn reaches(&self) -> [(&'static str, f32); 16] {
        [
            ("main_hour_tick_width", self.main_hour_tick_width / 2.0),
            ("main_hour_tick_height", self.main_hour_tick_height),
            ("small_hour_tick_width", self.small_hour_tick_width / 2.0),
            ("small_hour_tick_height", self.small_hour_tick_height),
            ("minute_tick_width", self.minute_tick_width / 2.0),
            ("minute_tick_height", self.minute_tick_height),
            ("minute_hand_length", self.minute_hand_length),
            ("minute_hand_width", self.minute_hand_width / 2.0),
            ("hour_hand_length", self.hour_hand_length),
            ("hour_hand_width", self.hour_hand_width / 2.0),
            ("central_disc_diameter", self.central_disc_diameter / 2.0),
            (
                "second_circle_center_offset",
                self.second_circle_center_offset + self.second_circle_diameter / 2.0,
            ),
            ("second_circle_diameter", self.second_circle_diameter / 2.0),
            ("second_hand_width0", self.second_hand_width0 / 2.0),
            ("second_hand_width1", self.second_hand_width1 / 2.0),
            ("second_hand_width2", self.second_hand_width2 / 2.0),
        ]
    }
}

/// What is wrong with a [`GeometrySpec`] field.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GeometryErrorKind {
    NegativeOrNonFinite,
    ExceedsHalfExtent,
}

/// A [`GeometrySpec`] that violates its invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryError {
    /// Name of the offending field.
    pub field: &'static str,
    /// The raw value, or the distance from the center for extent violations.
    pub value: f32,
    pub kind: GeometryErrorKind,
}

impl GeometryError {
    fn new(field: &'static str, value: f32, kind: GeometryErrorKind) -> Self {
        Self { field, value, kind }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            GeometryErrorKind::NegativeOrNonFinite => write!(
                f,
                "geometry field `{}` must be finite and non-negative, got {}",
                self.field, self.value
            ),
            GeometryErrorKind::ExceedsHalfExtent => write!(
                f,
                "geometry field `{}` reaches {} from the center, past the canvas half extent {}",
                self.field, self.value, HALF_EXTENT
            ),
        }
    }
}

impl std::error::Error for GeometryError {}
