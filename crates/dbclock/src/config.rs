use std::time::Duration;

use anyhow::{Context, Result};

use dbclock_dial::{GeometrySpec, Palette};
use dbclock_engine::paint::Color;
use dbclock_engine::time::MovementConfig;

/// Default easing time constant of the hands.
pub const DEFAULT_EASING: Duration = Duration::from_millis(50);

/// Longest accepted polling interval. Slower than this the seconds hand lags.
pub const MAX_INTERVAL: Duration = Duration::from_secs(1);

pub const ENV_DIAL_COLOR: &str = "DBCLOCK_DIAL_COLOR";
pub const ENV_TICKS_COLOR: &str = "DBCLOCK_TICKS_COLOR";
pub const ENV_HANDS_COLOR: &str = "DBCLOCK_HANDS_COLOR";
pub const ENV_SECONDS_COLOR: &str = "DBCLOCK_SECONDS_COLOR";
pub const ENV_DISC_COLOR: &str = "DBCLOCK_DISC_COLOR";
pub const ENV_RESOLUTION_MS: &str = "DBCLOCK_RESOLUTION_MS";
pub const ENV_IDLE_UPDATE_MS: &str = "DBCLOCK_IDLE_UPDATE_MS";
pub const ENV_EASING_MS: &str = "DBCLOCK_EASING_MS";

/// Everything the clock window can be configured with.
#[derive(Debug, Clone)]
pub struct ClockConfig {
    pub title: String,
    /// Initial window size in logical pixels.
    pub size: (f64, f64),
    pub palette: Palette,
    pub geometry: GeometrySpec,
    pub movement: MovementConfig,
    /// Hand easing time constant; zero snaps.
    pub easing: Duration,
    /// Window background behind the translucent dial.
    pub background: Color,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            title: "dbclock".to_string(),
            size: (600.0, 600.0),
            palette: Palette::default(),
            geometry: GeometrySpec::default(),
            movement: MovementConfig::default(),
            easing: DEFAULT_EASING,
            background: Color::white(),
        }
    }
}

impl ClockConfig {
    /// Defaults with `DBCLOCK_*` environment overrides applied.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides looked up by variable name. Unset variables keep the
    /// current value; malformed ones are errors.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let colors: [(&str, &mut Color); 5] = [
            (ENV_DIAL_COLOR, &mut self.palette.dial),
            (ENV_TICKS_COLOR, &mut self.palette.ticks),
            (ENV_HANDS_COLOR, &mut self.palette.hands),
            (ENV_SECONDS_COLOR, &mut self.palette.seconds),
            (ENV_DISC_COLOR, &mut self.palette.disc),
        ];
        for (name, slot) in colors {
            if let Some(value) = lookup(name) {
                *slot = Color::from_hex(&value).with_context(|| format!("{name} is not a valid color"))?;
            }
        }

        if let Some(value) = lookup(ENV_RESOLUTION_MS) {
            self.movement.resolution = parse_millis(ENV_RESOLUTION_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_IDLE_UPDATE_MS) {
            self.movement.idle_update = parse_millis(ENV_IDLE_UPDATE_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_EASING_MS) {
            self.easing = parse_millis(ENV_EASING_MS, &value)?;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let MovementConfig { resolution, idle_update } = self.movement;
        anyhow::ensure!(!resolution.is_zero(), "movement resolution must be positive");
        anyhow::ensure!(
            idle_update > resolution,
            "idle update interval ({idle_update:?}) must be longer than the resolution ({resolution:?})"
        );
        anyhow::ensure!(
            idle_update <= MAX_INTERVAL,
            "idle update interval ({idle_update:?}) must not exceed {MAX_INTERVAL:?}"
        );
        self.geometry.validate().context("invalid clock geometry")?;
        Ok(())
    }
}

fn parse_millis(name: &str, value: &str) -> Result<Duration> {
    let ms: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("{name}={value:?} is not a number of milliseconds"))?;
    anyhow::ensure!(
        ms.is_finite() && ms >= 0.0,
        "{name}={value:?} must be a finite, non-negative number of milliseconds"
    );
    Ok(Duration::from_nanos((ms * 1e6).round() as u64))
}
