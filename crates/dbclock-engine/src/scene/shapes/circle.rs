use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Transform};

use super::Border;

/// Circle draw payload.
///
/// `fill: None` with a border draws a ring.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Option<Color>,
    pub border: Option<Border>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, fill: Option<Color>, border: Option<Border>) -> Self {
        Self { center, radius, fill, border }
    }

    #[inline]
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        fill: Option<Color>,
        border: Option<Border>,
        transform: Transform,
    ) -> usize {
        self.push(DrawCmd::Circle(CircleCmd::new(center, radius, fill, border)), transform)
    }

    /// Records a solid disc.
    #[inline]
    pub fn push_solid_circle(&mut self, center: Vec2, radius: f32, color: Color, transform: Transform) -> usize {
        self.push_circle(center, radius, Some(color), None, transform)
    }

    /// Records an unfilled ring whose stroke runs inward from `radius`.
    #[inline]
    pub fn push_ring(
        &mut self,
        center: Vec2,
        radius: f32,
        stroke: f32,
        color: Color,
        transform: Transform,
    ) -> usize {
        self.push_circle(center, radius, None, Some(Border::new(stroke, color)), transform)
    }
}
