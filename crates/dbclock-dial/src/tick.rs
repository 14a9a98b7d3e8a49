use crate::geometry::GeometrySpec;

/// Number of tick marks around the dial.
pub const TICK_COUNT: usize = 60;

/// Angular distance between neighbouring ticks.
pub const TICK_STEP_DEGREES: u32 = 6;

/// Angles of all ticks in emission order: `0, 6, …, 354`.
pub fn tick_angles() -> impl Iterator<Item = u32> {
    (0..360).step_by(TICK_STEP_DEGREES as usize)
}

/// Visual class of a tick mark.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TickKind {
    /// 12, 3, 6 and 9 o'clock.
    MainHour,
    /// The remaining hour positions.
    SmallHour,
    Minute,
}

impl TickKind {
    #[inline]
    pub fn classify(angle: u32) -> Self {
        if angle % 90 == 0 {
            Self::MainHour
        } else if angle % 30 == 0 {
            Self::SmallHour
        } else {
            Self::Minute
        }
    }

    /// `(width, height)` of this kind of tick.
    #[inline]
    pub fn size(self, geometry: &GeometrySpec) -> (f32, f32) {
        match self {
            Self::MainHour => (geometry.main_hour_tick_width, geometry.main_hour_tick_height),
            Self::SmallHour => (geometry.small_hour_tick_width, geometry.small_hour_tick_height),
            Self::Minute => (geometry.minute_tick_width, geometry.minute_tick_height),
        }
    }
}

/// One tick, fully resolved against a [`GeometrySpec`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickDescriptor {
    pub angle: u32,
    pub kind: TickKind,
    pub width: f32,
    pub height: f32,
}

impl TickDescriptor {
    pub fn new(angle: u32, geometry: &GeometrySpec) -> Self {
        let kind = TickKind::classify(angle);
        let (width, height) = kind.size(geometry);
        Self { angle, kind, width, height }
    }
}
