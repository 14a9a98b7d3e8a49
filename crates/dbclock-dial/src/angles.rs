use chrono::Timelike;

/// Rotation of each hand in degrees, clockwise from 12 o'clock.
///
/// Angles are not normalized: the hour hand runs from 0° at midnight to just
/// under 720° before the next midnight.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    /// Angles for time of day `t`, with every hand advanced by the elapsed
    /// fraction of its unit.
    pub fn from_time<T: Timelike>(t: &T) -> Self {
        // Leap seconds report nanoseconds >= 1e9; pin them to the end of the second.
        let frac = f64::from(t.nanosecond().min(999_999_999)) / 1e9;
        let seconds = f64::from(t.second()) + frac;
        let minutes = f64::from(t.minute()) + seconds / 60.0;
        let hours = f64::from(t.hour()) + (f64::from(t.minute()) * 60.0 + seconds) / 3600.0;

        Self {
            hour: (hours * 30.0) as f32,
            minute: (minutes * 6.0) as f32,
            second: (seconds * 6.0) as f32,
        }
    }
}
