use super::{Vec2, Viewport};

/// Uniform "fit" mapping from a fixed-size canvas into a viewport.
///
/// The canvas is scaled by the same factor on both axes so that it fits
/// entirely inside the viewport, then centered along the slack axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewBox {
    pub scale: f32,
    pub offset: Vec2,
}

impl ViewBox {
    /// Identity mapping (canvas units == viewport pixels).
    pub const IDENTITY: ViewBox = ViewBox { scale: 1.0, offset: Vec2::zero() };

    /// Fits `canvas` into `viewport`.
    ///
    /// A degenerate viewport or canvas yields a zero scale, which collapses all
    /// geometry; renderers skip drawing in that case.
    pub fn fit(canvas: Vec2, viewport: Viewport) -> Self {
        if !viewport.is_valid() || canvas.x <= 0.0 || canvas.y <= 0.0 {
            return Self { scale: 0.0, offset: Vec2::zero() };
        }

        let scale = (viewport.width / canvas.x).min(viewport.height / canvas.y);
        let offset = Vec2::new(
            (viewport.width - canvas.x * scale) * 0.5,
            (viewport.height - canvas.y * scale) * 0.5,
        );
        Self { scale, offset }
    }

    /// Maps a canvas point into viewport space.
    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        p * self.scale + self.offset
    }

    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.scale <= 0.0 || !self.scale.is_finite()
    }
}
