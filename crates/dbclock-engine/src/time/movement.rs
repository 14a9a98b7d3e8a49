use std::time::Duration;

use chrono::{NaiveDateTime, TimeDelta, Timelike};

use super::source::{SystemTimeSource, TimeSource};

/// Default fast polling interval, about one 60 Hz display frame.
pub const DEFAULT_RESOLUTION: Duration = Duration::from_micros(16_700);

/// Default slow polling interval used while safely inside a second.
pub const DEFAULT_IDLE_UPDATE: Duration = Duration::from_millis(100);

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Polling intervals of a [`Movement`].
///
/// `idle_update` must be longer than `resolution`; a slow firing is recognised
/// by its interval exceeding the resolution.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MovementConfig {
    /// Fast interval, used right after a second boundary.
    pub resolution: Duration,
    /// Slow interval, used for the rest of the second.
    pub idle_update: Duration,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            idle_update: DEFAULT_IDLE_UPDATE,
        }
    }
}

impl MovementConfig {
    /// Returns a config that satisfies `0 < resolution < idle_update`.
    ///
    /// A zero resolution becomes one nanosecond; an `idle_update` that does not
    /// exceed the resolution is raised to twice the resolution.
    pub fn normalized(self) -> Self {
        let resolution = self.resolution.max(Duration::from_nanos(1));
        let idle_update = if self.idle_update > resolution {
            self.idle_update
        } else {
            resolution.saturating_mul(2)
        };
        Self { resolution, idle_update }
    }
}

/// Which of the two intervals the next firing uses.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IntervalMode {
    Fast,
    Slow,
}

impl IntervalMode {
    /// Mode that follows a sample lying `offset` past its second boundary.
    ///
    /// An offset of exactly zero counts as "just past the boundary" like any
    /// other offset below `resolution`.
    #[inline]
    pub fn for_offset(offset: Duration, resolution: Duration) -> Self {
        if offset < resolution { Self::Fast } else { Self::Slow }
    }
}

/// Mutable scheduler state, replaced wholesale by [`Movement::reset`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MovementState {
    /// Raw value of the most recent sample.
    pub last_sampled: Option<NaiveDateTime>,
    /// Sub-second remainder of the most recent sample, in `[0, 1s)`.
    pub offset: Duration,
    /// Most recent sample truncated to its second.
    pub interpolated: Option<NaiveDateTime>,
    /// Interval mode of the next firing.
    pub mode: IntervalMode,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            last_sampled: None,
            offset: Duration::ZERO,
            interpolated: None,
            mode: IntervalMode::Fast,
        }
    }
}

/// Notification carrying the second-aligned time to display.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Tick {
    pub time: NaiveDateTime,
}

type TickListener = Box<dyn FnMut(&Tick)>;

/// Second-boundary tracking scheduler for a clock's hands.
///
/// The host owns the timer and calls [`fire`](Self::fire) every
/// [`interval`](Self::interval). Each firing samples the time source, splits the
/// sample into a second-aligned part and a sub-second offset, then picks the
/// next interval:
/// - within `resolution` of a boundary: fast polling, to pin the boundary down
/// - otherwise: slow polling, to avoid wake-ups that would not move a hand
///
/// Only firings that ran at the slow interval emit a [`Tick`]. The ticked time
/// never has a sub-second component; smooth hand motion is up to the consumer.
///
/// Not thread-safe: firings must be serialized by the host loop.
pub struct Movement<S = SystemTimeSource> {
    config: MovementConfig,
    source: S,
    state: MovementState,
    listeners: Vec<TickListener>,
}

impl Movement<SystemTimeSource> {
    /// Creates a scheduler sampling the system's local clock.
    pub fn new(config: MovementConfig) -> Self {
        Self::with_source(config, SystemTimeSource)
    }
}

impl<S: TimeSource> Movement<S> {
    /// Creates a scheduler sampling `source`.
    ///
    /// `config` is passed through [`MovementConfig::normalized`] first; a slow
    /// firing is only recognisable when `idle_update` exceeds `resolution`.
    pub fn with_source(config: MovementConfig, source: S) -> Self {
        let normalized = config.normalized();
        if normalized != config {
            log::warn!("movement: adjusted {config:?} to {normalized:?}");
        }
        let config = normalized;

        Self {
            config,
            source,
            state: MovementState::default(),
            listeners: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> MovementConfig {
        self.config
    }

    #[inline]
    pub fn state(&self) -> &MovementState {
        &self.state
    }

    #[inline]
    pub fn mode(&self) -> IntervalMode {
        self.state.mode
    }

    /// Most recent second-aligned time, if anything has been sampled yet.
    #[inline]
    pub fn interpolated(&self) -> Option<NaiveDateTime> {
        self.state.interpolated
    }

    /// Delay until the next firing.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval_for(self.state.mode)
    }

    #[inline]
    pub fn interval_for(&self, mode: IntervalMode) -> Duration {
        match mode {
            IntervalMode::Fast => self.config.resolution,
            IntervalMode::Slow => self.config.idle_update,
        }
    }

    /// Registers a callback invoked synchronously for every emitted tick.
    ///
    /// Callbacks run inside [`fire`](Self::fire) and must not block.
    pub fn on_tick(&mut self, listener: impl FnMut(&Tick) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Forgets all sampled state and returns to fast polling.
    ///
    /// Registered callbacks are kept.
    pub fn reset(&mut self) {
        self.state = MovementState::default();
    }

    /// Handles one timer firing.
    ///
    /// Returns the emitted tick, if any; the same tick has already been
    /// delivered to every registered callback.
    pub fn fire(&mut self) -> Option<Tick> {
        let fired = self.state.mode;
        let time = self.source.now();
        let interpolated = self.sample(time);

        let next = IntervalMode::for_offset(self.state.offset, self.config.resolution);
        if next != fired {
            log::debug!(
                "movement: {fired:?} -> {next:?} (offset {:?}, next interval {:?})",
                self.state.offset,
                self.interval_for(next)
            );
        }
        self.state.mode = next;

        if self.interval_for(fired) <= self.config.resolution {
            return None;
        }

        let tick = Tick { time: interpolated };
        log::trace!("movement: tick {}", tick.time);
        for listener in &mut self.listeners {
            listener(&tick);
        }
        Some(tick)
    }

    /// Records a sample and returns its second-aligned part.
    ///
    /// Samples earlier than the previous one are accepted as-is.
    fn sample(&mut self, time: NaiveDateTime) -> NaiveDateTime {
        let offset_nanos = time.nanosecond() % NANOS_PER_SECOND;
        let interpolated = time - TimeDelta::nanoseconds(i64::from(offset_nanos));

        self.state.last_sampled = Some(time);
        self.state.offset = Duration::from_nanos(u64::from(offset_nanos));
        self.state.interpolated = Some(interpolated);

        interpolated
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::NaiveDate;

    use super::*;
    use crate::time::ManualTimeSource;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    fn movement(start: NaiveDateTime) -> (Movement<ManualTimeSource>, ManualTimeSource) {
        let clock = ManualTimeSource::new(start);
        (Movement::with_source(MovementConfig::default(), clock.clone()), clock)
    }

    // ── offset classification ─────────────────────────────────────────────

    #[test]
    fn zero_offset_classifies_like_small_offset() {
        let res = DEFAULT_RESOLUTION;
        assert_eq!(IntervalMode::for_offset(Duration::ZERO, res), IntervalMode::Fast);
        assert_eq!(IntervalMode::for_offset(Duration::from_nanos(1), res), IntervalMode::Fast);
        assert_eq!(IntervalMode::for_offset(Duration::from_millis(5), res), IntervalMode::Fast);
    }

    #[test]
    fn offset_at_resolution_is_slow() {
        let res = DEFAULT_RESOLUTION;
        assert_eq!(IntervalMode::for_offset(res, res), IntervalMode::Slow);
        assert_eq!(IntervalMode::for_offset(Duration::from_millis(950), res), IntervalMode::Slow);
    }

    // ── firing sequence ───────────────────────────────────────────────────

    #[test]
    fn starts_fast_without_a_sample() {
        let (m, _) = movement(at(0, 0, 0, 0));
        assert_eq!(m.mode(), IntervalMode::Fast);
        assert_eq!(m.interval(), DEFAULT_RESOLUTION);
        assert_eq!(m.interpolated(), None);
        assert_eq!(m.state().last_sampled, None);
    }

    #[test]
    fn boundary_scenario() {
        let (mut m, clock) = movement(at(0, 0, 0, 950));

        // First firing happens at the fast interval: no tick, demote to slow.
        assert_eq!(m.fire(), None);
        assert_eq!(m.state().offset, Duration::from_millis(950));
        assert_eq!(m.interpolated(), Some(at(0, 0, 0, 0)));
        assert_eq!(m.mode(), IntervalMode::Slow);
        assert_eq!(m.interval(), DEFAULT_IDLE_UPDATE);

        // Next firing lands just past the boundary: slow firing ticks, mode goes fast.
        clock.set(at(0, 0, 1, 5));
        assert_eq!(m.fire(), Some(Tick { time: at(0, 0, 1, 0) }));
        assert_eq!(m.state().offset, Duration::from_millis(5));
        assert_eq!(m.interpolated(), Some(at(0, 0, 1, 0)));
        assert_eq!(m.mode(), IntervalMode::Fast);
    }

    #[test]
    fn exact_boundary_sample_goes_fast() {
        let (mut m, clock) = movement(at(0, 0, 0, 500));
        m.fire();
        assert_eq!(m.mode(), IntervalMode::Slow);

        clock.set(at(0, 0, 1, 0));
        assert_eq!(m.fire(), Some(Tick { time: at(0, 0, 1, 0) }));
        assert_eq!(m.state().offset, Duration::ZERO);
        assert_eq!(m.mode(), IntervalMode::Fast);
    }

    #[test]
    fn fast_firings_never_tick() {
        let (mut m, clock) = movement(at(0, 0, 1, 0));
        for ms in [0, 3, 7, 12] {
            clock.set(at(0, 0, 1, ms));
            assert_eq!(m.fire(), None);
            assert_eq!(m.mode(), IntervalMode::Fast);
        }
    }

    #[test]
    fn slow_firings_tick_once_each() {
        let (mut m, clock) = movement(at(0, 0, 2, 100));
        m.fire();

        let mut ticks = Vec::new();
        for step in 1..=5 {
            clock.advance(TimeDelta::milliseconds(100));
            ticks.extend(m.fire());
            assert_eq!(ticks.len(), step);
        }
        assert!(ticks.iter().all(|t| t.time == at(0, 0, 2, 0)));
    }

    #[test]
    fn unchanged_source_is_idempotent() {
        let (mut m, _) = movement(at(10, 20, 30, 400));
        m.fire();
        let after_first = *m.state();

        for _ in 0..5 {
            assert_eq!(m.fire(), Some(Tick { time: at(10, 20, 30, 0) }));
            assert_eq!(*m.state(), after_first);
        }
    }

    #[test]
    fn ticked_time_has_no_subsecond_part() {
        let (mut m, clock) = movement(at(0, 0, 0, 300));
        m.fire();
        for ms in [123, 456, 789, 999] {
            clock.set(at(0, 0, 7, ms));
            let tick = m.fire().expect("slow firing ticks");
            assert_eq!(tick.time.nanosecond(), 0);
            assert_eq!(tick.time, at(0, 0, 7, 0));
        }
    }

    #[test]
    fn clock_going_backwards_is_accepted() {
        let (mut m, clock) = movement(at(10, 0, 5, 200));
        m.fire();

        clock.set(at(10, 0, 3, 900));
        assert_eq!(m.fire(), Some(Tick { time: at(10, 0, 3, 0) }));
        assert_eq!(m.state().last_sampled, Some(at(10, 0, 3, 900)));
        assert_eq!(m.state().offset, Duration::from_millis(900));
    }

    // ── callbacks / reset ─────────────────────────────────────────────────

    #[test]
    fn callbacks_receive_each_tick() {
        let (mut m, clock) = movement(at(0, 0, 0, 500));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        m.on_tick(move |t| sink.borrow_mut().push(t.time));

        m.fire();
        clock.set(at(0, 0, 1, 500));
        m.fire();
        clock.set(at(0, 0, 2, 500));
        m.fire();

        assert_eq!(*seen.borrow(), vec![at(0, 0, 1, 0), at(0, 0, 2, 0)]);
    }

    #[test]
    fn reset_returns_to_fast_without_sample() {
        let (mut m, _) = movement(at(0, 0, 0, 500));
        m.fire();
        assert_eq!(m.mode(), IntervalMode::Slow);

        m.reset();
        assert_eq!(*m.state(), MovementState::default());
        assert_eq!(m.fire(), None);
    }

    #[test]
    fn custom_intervals_are_honoured() {
        let config = MovementConfig {
            resolution: Duration::from_millis(10),
            idle_update: Duration::from_millis(250),
        };
        let clock = ManualTimeSource::new(at(0, 0, 0, 8));
        let mut m = Movement::with_source(config, clock.clone());

        m.fire();
        assert_eq!(m.mode(), IntervalMode::Fast);
        assert_eq!(m.interval(), Duration::from_millis(10));

        clock.set(at(0, 0, 0, 12));
        m.fire();
        assert_eq!(m.interval(), Duration::from_millis(250));
    }

    // ── config normalization ──────────────────────────────────────────────

    #[test]
    fn valid_config_is_kept() {
        assert_eq!(MovementConfig::default().normalized(), MovementConfig::default());
    }

    #[test]
    fn inverted_config_is_repaired() {
        let inverted = MovementConfig {
            resolution: Duration::from_millis(100),
            idle_update: Duration::from_millis(20),
        };
        let fixed = inverted.normalized();
        assert_eq!(fixed.resolution, Duration::from_millis(100));
        assert_eq!(fixed.idle_update, Duration::from_millis(200));

        let zero = MovementConfig { resolution: Duration::ZERO, idle_update: Duration::ZERO }.normalized();
        assert!(zero.resolution > Duration::ZERO);
        assert!(zero.idle_update > zero.resolution);
    }

    #[test]
    fn inverted_config_still_ticks() {
        let inverted = MovementConfig {
            resolution: Duration::from_millis(100),
            idle_update: Duration::from_millis(20),
        };
        let clock = ManualTimeSource::new(at(0, 0, 0, 500));
        let mut m = Movement::with_source(inverted, clock.clone());
        assert_eq!(m.config().idle_update, Duration::from_millis(200));

        assert_eq!(m.fire(), None);
        assert_eq!(m.mode(), IntervalMode::Slow);

        clock.set(at(0, 0, 1, 50));
        assert_eq!(m.fire(), Some(Tick { time: at(0, 0, 1, 0) }));
    }
}
