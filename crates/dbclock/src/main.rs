mod app;
mod config;
mod easing;

use anyhow::{Context, Result};

use dbclock_engine::logging::{init_logging, LoggingConfig};

use crate::app::ClockApplication;
use crate::config::ClockConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = ClockConfig::from_env().context("invalid dbclock configuration")?;
    log::debug!("starting with {config:?}");

    ClockApplication::new()
        .title(config.title)
        .size(config.size.0, config.size.1)
        .palette(config.palette)
        .geometry(config.geometry)
        .movement(config.movement)
        .easing(config.easing)
        .background(config.background)
        .run()
}
