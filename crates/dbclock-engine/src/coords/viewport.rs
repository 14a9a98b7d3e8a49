use winit::dpi::PhysicalSize;

/// Drawable area of the window in logical pixels.
///
/// The mesh shader divides by this to reach NDC, so it has to match the
/// surface the frame is presented to.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Converts a physical surface size using the window's scale factor.
    pub fn from_physical(size: PhysicalSize<u32>, scale_factor: f64) -> Self {
        let logical = size.to_logical::<f64>(scale_factor);
        Self::new(logical.width as f32, logical.height as f32)
    }

    /// `false` for a minimized window; nothing should be drawn into it.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}
