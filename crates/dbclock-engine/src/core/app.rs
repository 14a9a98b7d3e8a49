use std::time::Instant;

use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Scheduling answer returned from [`App::on_wake`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Wake {
    /// When to call `on_wake` again. `None` sleeps until the next window event.
    pub next: Option<Instant>,
    /// Whether the windows should be redrawn now.
    pub redraw: bool,
}

impl Wake {
    /// Sleep until something external happens.
    pub const IDLE: Wake = Wake { next: None, redraw: false };

    #[inline]
    pub const fn at(next: Instant) -> Self {
        Self { next: Some(next), redraw: false }
    }

    #[inline]
    pub const fn with_redraw(self, redraw: bool) -> Self {
        Self { next: self.next, redraw }
    }
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called for window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once the event loop reaches the instant requested by the previous
    /// `on_wake` (and once right after the first window opens).
    fn on_wake(&mut self, now: Instant) -> Wake {
        let _ = now;
        Wake::IDLE
    }

    /// Called once per rendered frame per window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn idle_wake_never_redraws() {
        assert_eq!(Wake::IDLE.next, None);
        assert!(!Wake::IDLE.redraw);
    }

    #[test]
    fn wake_builders_compose() {
        let t = Instant::now() + Duration::from_millis(100);
        let w = Wake::at(t).with_redraw(true);
        assert_eq!(w, Wake { next: Some(t), redraw: true });
    }
}
