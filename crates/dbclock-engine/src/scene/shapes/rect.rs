use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Transform};

/// Rectangle draw payload, in item-local space.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }
}

impl DrawList {
    /// Records a solid rectangle draw command.
    #[inline]
    pub fn push_solid_rect(&mut self, rect: Rect, color: Color, transform: Transform) -> usize {
        self.push(DrawCmd::Rect(RectCmd::new(rect, color)), transform)
    }
}
