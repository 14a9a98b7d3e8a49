pub(crate) mod circle;
pub(crate) mod polygon;
pub(crate) mod rect;

pub use circle::CircleCmd;
pub use polygon::PolygonCmd;
pub use rect::RectCmd;

use crate::paint::Color;

/// Stroke drawn just inside the outer edge of a shape.
///
/// The stroke band spans `[radius - width, radius]` for circles, so a stroked
/// shape never grows past its nominal bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
