use std::time::{Duration, Instant};

use dbclock_dial::HandAngles;

/// Below this distance (degrees) a hand is considered to have arrived.
const SETTLE_EPSILON: f32 = 0.01;

/// Smooths the once-per-second jumps of the hands.
///
/// Each displayed angle approaches its target exponentially along the shortest
/// arc, so 354° → 0° turns forward by 6° instead of spinning back. A zero time
/// constant disables smoothing.
#[derive(Debug, Clone)]
pub struct HandEasing {
    time_constant: Duration,
    current: Option<HandAngles>,
    target: HandAngles,
    last_step: Option<Instant>,
}

impl HandEasing {
    pub fn new(time_constant: Duration) -> Self {
        Self {
            time_constant,
            current: None,
            target: HandAngles::default(),
            last_step: None,
        }
    }

    /// Points the hands at `target`.
    ///
    /// The first target is shown immediately; there is nothing to ease from.
    pub fn set_target(&mut self, target: HandAngles, now: Instant) {
        if self.current.is_none() || self.time_constant.is_zero() {
            self.current = Some(target);
        }
        // Time spent settled must not count as easing time.
        if self.is_settled() {
            self.last_step = Some(now);
        }
        self.target = target;
    }

    /// Advances the animation to `now` and returns the angles to display.
    pub fn step(&mut self, now: Instant) -> HandAngles {
        let Some(current) = self.current else { return self.target };

        let dt = self
            .last_step
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_step = Some(now);

        let next = if self.time_constant.is_zero() {
            self.target
        } else {
            let alpha = 1.0 - (-dt.as_secs_f32() / self.time_constant.as_secs_f32()).exp();
            HandAngles {
                hour: approach(current.hour, self.target.hour, alpha),
                minute: approach(current.minute, self.target.minute, alpha),
                second: approach(current.second, self.target.second, alpha),
            }
        };

        self.current = Some(next);
        next
    }

    /// `true` once every hand sits on its target.
    pub fn is_settled(&self) -> bool {
        self.current.is_none_or(|c| {
            c.hour == self.target.hour && c.minute == self.target.minute && c.second == self.target.second
        })
    }

    #[inline]
    pub fn target(&self) -> HandAngles {
        self.target
    }
}

/// Signed shortest rotation from `from` to `to`, in `(-180, 180]`.
fn shortest_arc(from: f32, to: f32) -> f32 {
    let d = (to - from).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

fn approach(from: f32, to: f32, alpha: f32) -> f32 {
    let arc = shortest_arc(from, to);
    // Land exactly on the target (not a 360° alias of it) once close enough.
    if (arc * (1.0 - alpha)).abs() < SETTLE_EPSILON { to } else { from + arc * alpha }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angles(hour: f32, minute: f32, second: f32) -> HandAngles {
        HandAngles { hour, minute, second }
    }

    const TAU: Duration = Duration::from_millis(50);

    // ── shortest arc ──────────────────────────────────────────────────────

    #[test]
    fn arc_wraps_forward_across_twelve() {
        assert_eq!(shortest_arc(354.0, 0.0), 6.0);
        assert_eq!(shortest_arc(6.0, 354.0), -12.0);
        assert_eq!(shortest_arc(10.0, 730.0), 0.0);
        assert_eq!(shortest_arc(0.0, 180.0), 180.0);
    }

    #[test]
    fn second_hand_moves_forward_at_the_minute() {
        let t0 = Instant::now();
        let mut e = HandEasing::new(TAU);
        e.set_target(angles(0.0, 0.0, 354.0), t0);
        e.set_target(angles(0.0, 0.0, 0.0), t0);

        let mid = e.step(t0 + TAU);
        // Halfway-ish between 354 and 360, never back towards 180.
        assert!(mid.second > 354.0 && mid.second < 360.0, "second = {}", mid.second);
    }

    // ── easing ────────────────────────────────────────────────────────────

    #[test]
    fn first_target_snaps() {
        let t0 = Instant::now();
        let mut e = HandEasing::new(TAU);
        e.set_target(angles(90.0, 30.0, 60.0), t0);
        assert!(e.is_settled());
        assert_eq!(e.step(t0), angles(90.0, 30.0, 60.0));
    }

    #[test]
    fn zero_time_constant_snaps() {
        let t0 = Instant::now();
        let mut e = HandEasing::new(Duration::ZERO);
        e.set_target(angles(0.0, 0.0, 0.0), t0);
        e.set_target(angles(0.0, 0.0, 6.0), t0);
        assert_eq!(e.step(t0).second, 6.0);
        assert!(e.is_settled());
    }

    #[test]
    fn approach_is_monotonic_and_settles() {
        let t0 = Instant::now();
        let mut e = HandEasing::new(TAU);
        e.set_target(angles(0.0, 0.0, 0.0), t0);
        e.set_target(angles(0.0, 0.0, 6.0), t0);
        assert!(!e.is_settled());

        let mut last = 0.0;
        for k in 1..=40 {
            let now = t0 + Duration::from_millis(16 * k);
            let second = e.step(now).second;
            assert!(second >= last);
            last = second;
        }
        assert!(e.is_settled());
        assert_eq!(last, 6.0);
    }

    #[test]
    fn idle_time_is_not_counted() {
        let t0 = Instant::now();
        let mut e = HandEasing::new(TAU);
        e.set_target(angles(0.0, 0.0, 0.0), t0);
        e.step(t0);

        // A tick arrives after a long settled pause; the first frame right after
        // it must not jump straight to the target.
        let later = t0 + Duration::from_secs(5);
        e.set_target(angles(0.0, 0.0, 6.0), later);
        let first = e.step(later + Duration::from_millis(5));
        assert!(first.second > 0.0 && first.second < 3.0, "second = {}", first.second);
    }
}
