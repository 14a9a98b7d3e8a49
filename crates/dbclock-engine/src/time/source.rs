use std::cell::Cell;
use std::rc::Rc;

use chrono::{NaiveDateTime, TimeDelta};

/// Wall-clock sampling seam.
///
/// Returns local wall-clock time without a zone; callers that need a specific
/// zone convert before handing the value over. Any `Fn() -> NaiveDateTime`
/// closure is a time source.
pub trait TimeSource {
    fn now(&self) -> NaiveDateTime;
}

impl<F> TimeSource for F
where
    F: Fn() -> NaiveDateTime,
{
    #[inline]
    fn now(&self) -> NaiveDateTime {
        self()
    }
}

/// The system's local clock.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    #[inline]
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Settable fake clock.
///
/// Clones share the same instant, so a test can hand one clone to a
/// `Movement` and keep another to move time around.
#[derive(Debug, Clone)]
pub struct ManualTimeSource {
    now: Rc<Cell<NaiveDateTime>>,
}

impl ManualTimeSource {
    pub fn new(start: NaiveDateTime) -> Self {
        Self { now: Rc::new(Cell::new(start)) }
    }

    #[inline]
    pub fn set(&self, time: NaiveDateTime) {
        self.now.set(time);
    }

    /// Moves the clock by `by`; negative deltas move it backwards.
    #[inline]
    pub fn advance(&self, by: TimeDelta) {
        self.now.set(self.now.get() + by);
    }
}

impl TimeSource for ManualTimeSource {
    #[inline]
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    #[test]
    fn manual_clones_share_the_instant() {
        let a = ManualTimeSource::new(at(0, 0, 0, 0));
        let b = a.clone();
        a.advance(TimeDelta::milliseconds(1500));
        assert_eq!(b.now(), at(0, 0, 1, 500));
        b.set(at(3, 0, 0, 0));
        assert_eq!(a.now(), at(3, 0, 0, 0));
    }

    #[test]
    fn manual_can_go_backwards() {
        let src = ManualTimeSource::new(at(0, 0, 5, 0));
        src.advance(TimeDelta::milliseconds(-2500));
        assert_eq!(src.now(), at(0, 0, 2, 500));
    }

    #[test]
    fn closures_are_time_sources() {
        let fixed = at(12, 34, 56, 0);
        let src = move || fixed;
        assert_eq!(TimeSource::now(&src), fixed);
    }
}
