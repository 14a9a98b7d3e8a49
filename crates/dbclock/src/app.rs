use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use dbclock_dial::{Dial, FaceBuilder, GeometrySpec, HandAngles, Palette, CANVAS_SIZE};
use dbclock_engine::coords::{Vec2, ViewBox};
use dbclock_engine::core::{App as EngineApp, AppControl, FrameCtx, Wake};
use dbclock_engine::device::GpuInit;
use dbclock_engine::paint::Color;
use dbclock_engine::render::{tessellate, Mesh, MeshRenderer};
use dbclock_engine::time::{Movement, MovementConfig, SystemTimeSource, TimeSource};
use dbclock_engine::window::{Runtime, RuntimeConfig};

use crate::config::ClockConfig;
use crate::easing::HandEasing;

// ── ClockApplication ──────────────────────────────────────────────────────

/// Clock window builder.
///
/// ```rust,ignore
/// ClockApplication::new()
///     .title("dbclock")
///     .palette(Palette { seconds: Color::from_hex("#06c")?, ..Palette::default() })
///     .run()?;
/// ```
pub struct ClockApplication {
    title:      String,
    width:      f64,
    height:     f64,
    palette:    Palette,
    geometry:   GeometrySpec,
    movement:   MovementConfig,
    easing:     Duration,
    background: Color,
}

impl ClockApplication {
    pub fn new() -> Self {
        let config = ClockConfig::default();
        Self {
            title:      config.title,
            width:      config.size.0,
            height:     config.size.1,
            palette:    config.palette,
            geometry:   config.geometry,
            movement:   config.movement,
            easing:     config.easing,
            background: config.background,
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn geometry(mut self, geometry: GeometrySpec) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn movement(mut self, movement: MovementConfig) -> Self {
        self.movement = movement;
        self
    }

    /// Hand easing time constant. `Duration::ZERO` makes the hands jump.
    pub fn easing(mut self, time_constant: Duration) -> Self {
        self.easing = time_constant;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Builds the face and runs the event loop until the window closes.
    pub fn run(self) -> Result<()> {
        let dial = FaceBuilder::new()
            .geometry(self.geometry)
            .palette(self.palette)
            .build()
            .context("failed to build the clock face")?;

        let config = RuntimeConfig {
            title:        self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            ..RuntimeConfig::default()
        };

        let movement = Movement::new(self.movement);
        let state = ClockAppState::new(movement, dial, self.easing, self.background);

        Runtime::run(config, GpuInit::default(), state).context("dbclock runtime error")
    }
}

impl Default for ClockApplication {
    fn default() -> Self {
        Self::new()
    }
}

// ── ClockAppState ─────────────────────────────────────────────────────────

/// Internal state that implements `dbclock_engine::core::App`.
///
/// The movement decides when the displayed second changes; the easing
/// decides how the hands get there.
struct ClockAppState<S = SystemTimeSource> {
    movement:   Movement<S>,
    /// Last second handed to the easing; slow ticks repeat it ~10 times.
    shown:      Option<NaiveDateTime>,
    dial:       Dial,
    easing:     HandEasing,
    renderer:   MeshRenderer,
    mesh:       Mesh,
    background: Color,
}

impl<S: TimeSource> ClockAppState<S> {
    fn new(movement: Movement<S>, dial: Dial, easing: Duration, background: Color) -> Self {
        Self {
            movement,
            shown: None,
            dial,
            easing: HandEasing::new(easing),
            renderer: MeshRenderer::new(),
            mesh: Mesh::new(),
            background,
        }
    }

    /// Fires the movement once and forwards any new time to the easing.
    ///
    /// Returns `true` when the displayed second changed.
    fn advance(&mut self, now: Instant) -> bool {
        let first = self.movement.interpolated().is_none();
        let tick = self.movement.fire();

        // The very first firing never ticks; show its sample right away
        // instead of leaving the hands at midnight for a second.
        let shown = match (tick, first) {
            (Some(tick), _) => Some(tick.time),
            (None, true) => self.movement.interpolated(),
            (None, false) => None,
        };

        match shown {
            Some(time) if self.shown != Some(time) => {
                self.shown = Some(time);
                self.easing.set_target(HandAngles::from_time(&time), now);
                true
            }
            _ => false,
        }
    }
}

impl<S: TimeSource + 'static> EngineApp for ClockAppState<S> {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                log::info!("escape pressed, closing");
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    fn on_wake(&mut self, now: Instant) -> Wake {
        let redraw = self.advance(now);
        let interval = self.movement.interval();
        match now.checked_add(interval) {
            Some(next) => Wake::at(next).with_redraw(redraw),
            None => {
                log::warn!("movement interval {interval:?} is out of range; stopping the clock");
                Wake::IDLE.with_redraw(redraw)
            }
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let angles = self.easing.step(ctx.now);
        self.dial.set_angles(angles);

        let view = ViewBox::fit(Vec2::new(CANVAS_SIZE, CANVAS_SIZE), ctx.window.viewport());
        tessellate(self.dial.draw_list(), view, &mut self.mesh);

        let renderer = &mut self.renderer;
        let mesh     = &self.mesh;
        let control = ctx.render(self.background, |rctx, target| {
            renderer.render(rctx, target, mesh);
        });

        if !self.easing.is_settled() {
            ctx.window.request_redraw();
        }

        control
    }
}
