use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Transform};

/// Filled convex polygon payload.
///
/// Points are in item-local space and wound in either direction; renderers
/// triangulate as a fan from the first point, so the outline must be convex.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
}

impl PolygonCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, color: Color) -> Self {
        Self { points, color }
    }
}

impl DrawList {
    /// Records a solid convex polygon.
    #[inline]
    pub fn push_polygon(&mut self, points: impl Into<Vec<Vec2>>, color: Color, transform: Transform) -> usize {
        self.push(DrawCmd::Polygon(PolygonCmd::new(points.into(), color)), transform)
    }
}
