use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::rect::RectCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::tessellate` how to triangulate it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Circle(CircleCmd),
    Polygon(PolygonCmd),
}
