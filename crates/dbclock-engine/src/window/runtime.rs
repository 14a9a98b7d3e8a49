use anyhow::{Context, Result};
use ouroboros::self_referencing;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, Wake, WindowCtx};
use crate::device::{Gpu, GpuInit};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Smallest size the window may be shrunk to.
    pub min_size: Option<LogicalSize<f64>>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "dbclock".to_string(),
            initial_size: LogicalSize::new(600.0, 600.0),
            min_size: Some(LogicalSize::new(120.0, 120.0)),
        }
    }
}

/// Entry point for the runtime.
///
/// Drives a single window. Between frames the loop sleeps until either a
/// window event arrives or the deadline returned by `App::on_wake` passes.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl WindowEntry {
    fn open(event_loop: &ActiveEventLoop, config: &RuntimeConfig, gpu_init: GpuInit) -> Result<Self> {
        let mut attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.initial_size);
        if let Some(min) = config.min_size {
            attrs = attrs.with_min_inner_size(min);
        }

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
            .try_build()
            .context("GPU initialization failed for window")
    }

    fn id(&self) -> WindowId {
        self.with_window(|w| w.id())
    }

    fn request_redraw(&self) {
        self.with_window(|w| w.request_redraw());
    }

    /// Reconfigures the surface to the window's current size.
    fn sync_size(&mut self) {
        let size = self.with_window(|w| w.inner_size());
        self.with_gpu_mut(|gpu| gpu.resize(size));
        self.request_redraw();
    }
}

struct RuntimeState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    /// Deadline of the next `App::on_wake` call. `None` sleeps until an event.
    next_wake: Option<Instant>,
    exit_requested: bool,
    /// First error that stopped the loop, reported from `Runtime::run`.
    fatal: Option<anyhow::Error>,
}

impl<A> RuntimeState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            next_wake: None,
            exit_requested: false,
            fatal: None,
        }
    }

    fn exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        self.window = None;
        event_loop.exit();
    }

    /// Calls `App::on_wake` if its deadline has passed; returns the next deadline.
    fn service_wake(&mut self, now: Instant) -> Option<Instant> {
        if !self.next_wake.is_some_and(|t| now >= t) {
            return self.next_wake;
        }

        let Wake { next, redraw } = self.app.on_wake(now);
        if redraw {
            if let Some(entry) = &self.window {
                entry.request_redraw();
            }
        }

        // A deadline already in the past would never be waited for; treat it
        // as "as soon as possible".
        self.next_wake = next.map(|t| t.max(now));
        self.next_wake
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let mut control = AppControl::Continue;

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else { return };

        entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: fields.window.id(),
                    window: fields.window,
                },
                gpu: fields.gpu,
                now: Instant::now(),
            };
            control = app.on_frame(&mut ctx);
        });

        if control == AppControl::Exit {
            self.exit(event_loop);
        }
    }
}

impl<A> ApplicationHandler for RuntimeState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        match WindowEntry::open(event_loop, &self.config, self.gpu_init.clone()) {
            Ok(entry) => {
                log::info!("window opened: {:?}", self.config.title);
                entry.request_redraw();
                self.window = Some(entry);
                // First wake right away so the app can sample the clock.
                self.next_wake = Some(Instant::now());
            }
            Err(e) => {
                log::error!("failed to create initial window: {e:#}");
                self.fatal = Some(e);
                self.exit(event_loop);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let flow = match self.service_wake(Instant::now()) {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        };
        event_loop.set_control_flow(flow);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested || self.window.as_ref().map(WindowEntry::id) != Some(window_id) {
            return;
        }

        if self.app.on_window_event(window_id, &event) == AppControl::Exit {
            self.exit(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.exit(event_loop),

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.window.as_mut() {
                    entry.sync_size();
                }
            }

            WindowEvent::Occluded(false) => {
                if let Some(entry) = &self.window {
                    entry.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}
