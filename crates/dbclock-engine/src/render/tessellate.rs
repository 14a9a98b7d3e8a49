use core::f32::consts::TAU;

use bytemuck::{Pod, Zeroable};

use crate::coords::{Vec2, ViewBox};
use crate::paint::Color;
use crate::scene::shapes::{CircleCmd, PolygonCmd, RectCmd};
use crate::scene::{DrawCmd, DrawList, RotationTable, Transform};

/// One vertex of the tessellated scene.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Logical pixels.
    pub pos: [f32; 2],
    /// Premultiplied linear RGBA.
    pub color: [f32; 4],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.pos[0], self.pos[1])
    }
}

/// Triangle list in paint order.
///
/// Reused across frames; `clear()` keeps the allocation.
#[derive(Debug, Default, Clone)]
pub struct Mesh {
    vertices: Vec<MeshVertex>,
}

impl Mesh {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    #[inline]
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
        for p in [a, b, c] {
            self.vertices.push(MeshVertex { pos: [p.x, p.y], color });
        }
    }

    /// Fan triangulation of a convex outline.
    fn fan(&mut self, points: &[Vec2], color: [f32; 4]) {
        let Some((&first, rest)) = points.split_first() else { return };
        for pair in rest.windows(2) {
            self.triangle(first, pair[0], pair[1], color);
        }
    }
}

/// Segment count for a circle of `radius_px` screen pixels.
///
/// Keeps the chord error well under a pixel without flooding small discs
/// with triangles.
pub fn segments_for_radius(radius_px: f32) -> u32 {
    if !radius_px.is_finite() || radius_px <= 0.0 {
        return 0;
    }
    ((radius_px.sqrt() * 6.0).ceil() as u32).clamp(12, 256)
}

/// Tessellates `list` into `mesh` (which is cleared first).
///
/// Every vertex is fully transformed: item translation, fixed or shared
/// rotation, then the `view` fit into logical pixels.
pub fn tessellate(list: &DrawList, view: ViewBox, mesh: &mut Mesh) {
    mesh.clear();
    if view.is_degenerate() {
        return;
    }

    let rotations = list.rotations();
    for item in list.items() {
        match &item.cmd {
            DrawCmd::Rect(cmd) => rect(mesh, cmd, &item.transform, rotations, view),
            DrawCmd::Circle(cmd) => circle(mesh, cmd, &item.transform, rotations, view),
            DrawCmd::Polygon(cmd) => polygon(mesh, cmd, &item.transform, rotations, view),
        }
    }
}

fn place(p: Vec2, transform: &Transform, rotations: &RotationTable, view: ViewBox) -> Vec2 {
    view.apply(transform.apply(p, rotations))
}

fn visible(color: Color) -> Option<[f32; 4]> {
    (!color.is_transparent() && color.is_finite()).then(|| color.to_array())
}

fn rect(mesh: &mut Mesh, cmd: &RectCmd, transform: &Transform, rotations: &RotationTable, view: ViewBox) {
    let r = cmd.rect.normalized();
    if r.is_empty() {
        return;
    }
    let Some(color) = visible(cmd.color) else { return };

    let corners = r.corners().map(|p| place(p, transform, rotations, view));
    mesh.fan(&corners, color);
}

fn polygon(
    mesh: &mut Mesh,
    cmd: &PolygonCmd,
    transform: &Transform,
    rotations: &RotationTable,
    view: ViewBox,
) {
    if cmd.points.len() < 3 {
        return;
    }
    let Some(color) = visible(cmd.color) else { return };

    let points: Vec<Vec2> = cmd
        .points
        .iter()
        .map(|&p| place(p, transform, rotations, view))
        .collect();
    mesh.fan(&points, color);
}

fn circle(
    mesh: &mut Mesh,
    cmd: &CircleCmd,
    transform: &Transform,
    rotations: &RotationTable,
    view: ViewBox,
) {
    // A circle is rotation-invariant around its own center, so only the
    // center needs the full transform.
    let center = place(cmd.center, transform, rotations, view);
    let radius = cmd.radius * view.scale;
    let segments = segments_for_radius(radius);
    if segments == 0 {
        return;
    }

    let stroke = cmd
        .border
        .as_ref()
        .map(|b| (b.width.clamp(0.0, cmd.radius) * view.scale, b.color))
        .filter(|(w, _)| *w > 0.0);
    let inner = radius - stroke.map_or(0.0, |(w, _)| w);

    let ring_point = |r: f32, k: u32| {
        let a = k as f32 / segments as f32 * TAU;
        Vec2::new(center.x + r * a.cos(), center.y + r * a.sin())
    };

    if let Some(fill) = cmd.fill.and_then(visible) {
        if inner > 0.0 {
            for k in 0..segments {
                mesh.triangle(center, ring_point(inner, k), ring_point(inner, k + 1), fill);
            }
        }
    }

    if let Some((_, color)) = stroke {
        let Some(color) = visible(color) else { return };
        for k in 0..segments {
            let (o0, o1) = (ring_point(radius, k), ring_point(radius, k + 1));
            let (i0, i1) = (ring_point(inner, k), ring_point(inner, k + 1));
            mesh.triangle(o0, o1, i1, color);
            mesh.triangle(o0, i1, i0, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Viewport};
    use crate::scene::Rotation;

    const CENTER: Vec2 = Vec2::new(300.0, 300.0);

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-2 && (a.y - b.y).abs() < 1e-2
    }

    fn tess(list: &DrawList) -> Mesh {
        let mut mesh = Mesh::new();
        tessellate(list, ViewBox::IDENTITY, &mut mesh);
        mesh
    }

    // ── rectangles / polygons ─────────────────────────────────────────────

    #[test]
    fn rect_is_two_triangles() {
        let mut list = DrawList::new();
        list.push_solid_rect(Rect::new(0.0, 0.0, 10.0, 20.0), Color::black(), Transform::IDENTITY);
        let mesh = tess(&list);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertices()[0].position(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn shared_rotation_is_resolved_at_tessellation() {
        let mut list = DrawList::new();
        let hand = list.add_rotation(CENTER);
        // A 2-unit wide needle from the center up to 12 o'clock.
        list.push_solid_rect(
            Rect::new(0.0, 0.0, 2.0, 300.0),
            Color::black(),
            Transform::translate(Vec2::new(299.0, 0.0)).with_rotation(Rotation::Shared(hand)),
        );

        let tip = tess(&list).vertices()[0].position();
        assert!(close(tip, Vec2::new(299.0, 0.0)));

        list.set_rotation(hand, 90.0);
        let tip = tess(&list).vertices()[0].position();
        assert!(close(tip, Vec2::new(600.0, 299.0)));
    }

    #[test]
    fn polygon_fans_from_first_point() {
        let mut list = DrawList::new();
        list.push_polygon(
            vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(3.0, 5.0), Vec2::new(1.0, 5.0)],
            Color::black(),
            Transform::IDENTITY,
        );
        let mesh = tess(&list);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertices()[3].position(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn degenerate_shapes_emit_nothing() {
        let mut list = DrawList::new();
        list.push_polygon(vec![Vec2::zero(), Vec2::new(1.0, 0.0)], Color::black(), Transform::IDENTITY);
        list.push_solid_rect(Rect::new(0.0, 0.0, 0.0, 5.0), Color::black(), Transform::IDENTITY);
        list.push_solid_circle(CENTER, 0.0, Color::black(), Transform::IDENTITY);
        list.push_solid_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::transparent(), Transform::IDENTITY);
        assert!(tess(&list).is_empty());
    }

    // ── circles ───────────────────────────────────────────────────────────

    #[test]
    fn filled_circle_is_a_fan() {
        let mut list = DrawList::new();
        list.push_solid_circle(CENTER, 32.0, Color::black(), Transform::IDENTITY);
        let mesh = tess(&list);
        assert_eq!(mesh.triangle_count() as u32, segments_for_radius(32.0));
        assert_eq!(mesh.vertices()[0].position(), CENTER);
    }

    #[test]
    fn ring_stays_inside_its_radius() {
        let mut list = DrawList::new();
        list.push_ring(CENTER, 30.0, 8.0, Color::black(), Transform::IDENTITY);
        let mesh = tess(&list);

        assert_eq!(mesh.triangle_count() as u32, 2 * segments_for_radius(30.0));
        for v in mesh.vertices() {
            let d = (v.position() - CENTER).length();
            assert!((22.0 - 1e-3..=30.0 + 1e-3).contains(&d), "vertex at distance {d}");
        }
    }

    #[test]
    fn rotated_circle_moves_its_center() {
        let mut list = DrawList::new();
        let hand = list.add_rotation(CENTER);
        list.push_solid_circle(
            Vec2::new(300.0, 126.0),
            10.0,
            Color::black(),
            Transform::IDENTITY.with_rotation(Rotation::Shared(hand)),
        );
        list.set_rotation(hand, 180.0);
        let c = tess(&list).vertices()[0].position();
        assert!(close(c, Vec2::new(300.0, 474.0)));
    }

    // ── view fit ──────────────────────────────────────────────────────────

    #[test]
    fn view_box_scales_output() {
        let mut list = DrawList::new();
        list.push_solid_rect(Rect::new(300.0, 300.0, 10.0, 10.0), Color::black(), Transform::IDENTITY);

        let view = ViewBox::fit(Vec2::new(600.0, 600.0), Viewport::new(1200.0, 600.0));
        let mut mesh = Mesh::new();
        tessellate(&list, view, &mut mesh);
        assert_eq!(mesh.vertices()[0].position(), Vec2::new(600.0, 300.0));
    }

    #[test]
    fn degenerate_view_emits_nothing() {
        let mut list = DrawList::new();
        list.push_solid_circle(CENTER, 10.0, Color::black(), Transform::IDENTITY);
        let view = ViewBox::fit(Vec2::new(600.0, 600.0), Viewport::new(0.0, 0.0));
        let mut mesh = Mesh::new();
        tessellate(&list, view, &mut mesh);
        assert!(mesh.is_empty());
    }

    #[test]
    fn segment_count_grows_with_radius() {
        assert_eq!(segments_for_radius(0.0), 0);
        assert_eq!(segments_for_radius(1.0), 12);
        assert!(segments_for_radius(300.0) > segments_for_radius(30.0));
        assert_eq!(segments_for_radius(1.0e6), 256);
    }
}
