use dbclock_engine::coords::{Rect, Vec2};
use dbclock_engine::scene::{DrawList, Rotation, RotationId, Transform};

use crate::dial::Dial;
use crate::geometry::{GeometryError, GeometrySpec, CENTER, HALF_EXTENT};
use crate::palette::Palette;
use crate::tick::{tick_angles, TickDescriptor};

/// Builds a [`Dial`] from geometry and colors.
///
/// Emission order is paint order:
/// dial disc, 60 ticks from 12 o'clock clockwise, hour hand, minute hand,
/// seconds hand (outer quad, ring, inner quad), central disc.
#[derive(Debug, Clone, Default)]
pub struct FaceBuilder {
    geometry: GeometrySpec,
    palette: Palette,
}

impl FaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn geometry(mut self, geometry: GeometrySpec) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Validates the geometry and emits the face.
    pub fn build(&self) -> Result<Dial, GeometryError> {
        self.geometry.validate()?;

        let g = &self.geometry;
        let p = &self.palette;
        let mut list = DrawList::new();

        // Rotation slots are allocated up front so ids are stable across builds.
        let hour = list.add_rotation(CENTER);
        let minute = list.add_rotation(CENTER);
        let second = list.add_rotation(CENTER);

        list.push_solid_circle(CENTER, g.dial_diameter / 2.0, p.dial, Transform::IDENTITY);

        for angle in tick_angles() {
            let tick = TickDescriptor::new(angle, g);
            list.push_solid_rect(
                Rect::new(0.0, 0.0, tick.width, tick.height),
                p.ticks,
                Transform::translate(Vec2::new(HALF_EXTENT - tick.width / 2.0, 0.0))
                    .with_rotation(Rotation::Fixed { degrees: angle as f32, pivot: CENTER }),
            );
        }

        push_hand(&mut list, g.hour_hand_width, g.hour_hand_length, p, hour);
        push_hand(&mut list, g.minute_hand_width, g.minute_hand_length, p, minute);
        push_seconds_hand(&mut list, g, p, second);

        list.push_solid_circle(CENTER, g.central_disc_diameter / 2.0, p.disc, Transform::IDENTITY);

        log::debug!("clock face built: {} primitives", list.len());

        Ok(Dial::new(list, hour, minute, second))
    }
}

fn push_hand(list: &mut DrawList, width: f32, length: f32, p: &Palette, rotation: RotationId) {
    list.push_solid_rect(
        Rect::new(0.0, 0.0, width, length),
        p.hands,
        Transform::translate(Vec2::new(HALF_EXTENT - width / 2.0, HALF_EXTENT - length))
            .with_rotation(Rotation::Shared(rotation)),
    );
}

/// Tapered needle from the rim to the ring, the ring itself, and a wider
/// needle from the ring to the center.
fn push_seconds_hand(list: &mut DrawList, g: &GeometrySpec, p: &Palette, rotation: RotationId) {
    let c = HALF_EXTENT;
    let d = g.second_circle_diameter;
    let o = g.second_circle_center_offset;
    let (w0, w1, w2) = (g.second_hand_width0, g.second_hand_width1, g.second_hand_width2);

    let ring_top = c - d / 2.0 - o;
    let ring_bottom = c + d / 2.0 - o;
    let t = Transform::IDENTITY.with_rotation(Rotation::Shared(rotation));

    list.push_polygon(
        [
            Vec2::new(c - w0 / 2.0, 0.0),
            Vec2::new(c + w0 / 2.0, 0.0),
            Vec2::new(c + w1 / 2.0, ring_top + w1 / 2.0),
            Vec2::new(c - w1 / 2.0, ring_top + w1 / 2.0),
        ],
        p.seconds,
        t,
    );

    list.push_ring(Vec2::new(c, c - o), d / 2.0, w1, p.seconds, t);

    list.push_polygon(
        [
            Vec2::new(c - w1 / 2.0, ring_bottom - w1 / 2.0),
            Vec2::new(c + w1 / 2.0, ring_bottom - w1 / 2.0),
            Vec2::new(c + w2 / 2.0, c),
            Vec2::new(c - w2 / 2.0, c),
        ],
        p.seconds,
        t,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dial::Hand;
    use crate::tick::TICK_COUNT;
    use chrono::NaiveTime;
    use dbclock_engine::scene::DrawCmd;

    const DIAL: usize = 0;
    const FIRST_TICK: usize = 1;
    const HOUR_HAND: usize = FIRST_TICK + TICK_COUNT;
    const MINUTE_HAND: usize = HOUR_HAND + 1;
    const SECONDS_QUAD1: usize = MINUTE_HAND + 1;
    const SECONDS_RING: usize = SECONDS_QUAD1 + 1;
    const SECONDS_QUAD2: usize = SECONDS_RING + 1;
    const CENTRAL_DISC: usize = SECONDS_QUAD2 + 1;

    fn default_dial() -> Dial {
        FaceBuilder::new().build().unwrap()
    }

    // ── emission order ────────────────────────────────────────────────────

    #[test]
    fn face_has_67_primitives() {
        assert_eq!(default_dial().draw_list().len(), 67);
        assert_eq!(CENTRAL_DISC, 66);
    }

    #[test]
    fn dial_comes_first_and_disc_last() {
        let dial = default_dial();
        let items = dial.draw_list().items();
        let palette = Palette::default();

        let DrawCmd::Circle(backdrop) = &items[DIAL].cmd else { panic!("dial is not a circle") };
        assert_eq!(backdrop.diameter(), 632.0);
        assert_eq!(backdrop.center, CENTER);
        assert_eq!(backdrop.fill, Some(palette.dial));

        let DrawCmd::Circle(hub) = &items[CENTRAL_DISC].cmd else { panic!("hub is not a circle") };
        assert_eq!(hub.diameter(), 64.0);
        assert_eq!(hub.fill, Some(palette.disc));
    }

    #[test]
    fn ticks_ascend_clockwise_from_twelve() {
        let dial = default_dial();
        let list = dial.draw_list();
        for (k, angle) in tick_angles().enumerate() {
            let index = FIRST_TICK + k;
            let DrawCmd::Rect(r) = &list.items()[index].cmd else { panic!("tick {k} is not a rect") };
            let tick = TickDescriptor::new(angle, &GeometrySpec::default());
            assert_eq!((r.rect.size.x, r.rect.size.y), (tick.width, tick.height));
            assert_eq!(list.item_degrees(index), angle as f32);
            assert_eq!(list.items()[index].transform.translate, Vec2::new(300.0 - tick.width / 2.0, 0.0));
        }
    }

    #[test]
    fn hands_follow_the_ticks() {
        let dial = default_dial();
        let items = dial.draw_list().items();

        let DrawCmd::Rect(hour) = &items[HOUR_HAND].cmd else { panic!() };
        assert_eq!((hour.rect.size.x, hour.rect.size.y), (34.0, 184.0));
        assert_eq!(items[HOUR_HAND].transform.translate, Vec2::new(283.0, 116.0));
        assert_eq!(items[HOUR_HAND].transform.rotation, Rotation::Shared(dial.rotation_id(Hand::Hour)));

        let DrawCmd::Rect(minute) = &items[MINUTE_HAND].cmd else { panic!() };
        assert_eq!((minute.rect.size.x, minute.rect.size.y), (24.0, 284.0));
        assert_eq!(items[MINUTE_HAND].transform.translate, Vec2::new(288.0, 16.0));

        assert!(matches!(items[SECONDS_QUAD1].cmd, DrawCmd::Polygon(_)));
        assert!(matches!(items[SECONDS_RING].cmd, DrawCmd::Circle(_)));
        assert!(matches!(items[SECONDS_QUAD2].cmd, DrawCmd::Polygon(_)));
    }

    // ── seconds hand ──────────────────────────────────────────────────────

    #[test]
    fn seconds_hand_points() {
        let dial = default_dial();
        let items = dial.draw_list().items();

        // D = 60, o = 174: ring spans y 96..156 around (300, 126).
        let DrawCmd::Polygon(outer) = &items[SECONDS_QUAD1].cmd else { panic!() };
        assert_eq!(
            outer.points,
            vec![
                Vec2::new(298.0, 0.0),
                Vec2::new(302.0, 0.0),
                Vec2::new(304.0, 100.0),
                Vec2::new(296.0, 100.0),
            ]
        );

        let DrawCmd::Circle(ring) = &items[SECONDS_RING].cmd else { panic!() };
        assert_eq!(ring.center, Vec2::new(300.0, 126.0));
        assert_eq!(ring.radius, 30.0);
        assert_eq!(ring.fill, None);
        assert_eq!(ring.border.as_ref().map(|b| b.width), Some(8.0));

        let DrawCmd::Polygon(inner) = &items[SECONDS_QUAD2].cmd else { panic!() };
        assert_eq!(
            inner.points,
            vec![
                Vec2::new(296.0, 152.0),
                Vec2::new(304.0, 152.0),
                Vec2::new(308.0, 300.0),
                Vec2::new(292.0, 300.0),
            ]
        );
    }

    #[test]
    fn seconds_parts_share_one_angle() {
        let mut dial = default_dial();
        dial.set_rotation(Hand::Second, 42.0);
        let list = dial.draw_list();
        for index in [SECONDS_QUAD1, SECONDS_RING, SECONDS_QUAD2] {
            assert_eq!(list.item_degrees(index), 42.0);
        }
    }

    // ── rotation updates ──────────────────────────────────────────────────

    #[test]
    fn hands_rotate_independently() {
        let mut dial = default_dial();
        dial.set_rotation(Hand::Hour, 10.0);
        dial.set_rotation(Hand::Minute, 20.0);
        dial.set_rotation(Hand::Second, 30.0);

        dial.set_rotation(Hand::Minute, 200.0);

        let list = dial.draw_list();
        assert_eq!(list.item_degrees(HOUR_HAND), 10.0);
        assert_eq!(list.item_degrees(MINUTE_HAND), 200.0);
        assert_eq!(list.item_degrees(SECONDS_RING), 30.0);
        assert_eq!(list.item_degrees(FIRST_TICK + 5), 30.0); // fixed tick at 30°
        assert_eq!(list.item_degrees(DIAL), 0.0);
    }

    #[test]
    fn rotation_is_not_normalized() {
        let mut dial = default_dial();
        dial.set_rotation(Hand::Hour, 725.0);
        assert_eq!(dial.rotation(Hand::Hour), 725.0);
    }

    #[test]
    fn set_rotation_never_rebuilds_the_list() {
        let mut dial = default_dial();
        let before = dial.draw_list().items().to_vec();
        dial.set_rotation(Hand::Hour, 123.0);
        assert_eq!(dial.draw_list().items(), &before[..]);
    }

    #[test]
    fn three_oclock_round_trip() {
        let mut dial = default_dial();
        assert!(dial.set_time(&NaiveTime::from_hms_opt(3, 0, 0).unwrap()));

        let list = dial.draw_list();
        assert_eq!(list.item_degrees(HOUR_HAND), 90.0);
        assert_eq!(list.item_degrees(MINUTE_HAND), 0.0);
        assert_eq!(list.item_degrees(SECONDS_QUAD1), 0.0);
    }

    #[test]
    fn unchanged_time_is_ignored() {
        let mut dial = default_dial();
        let t = NaiveTime::from_hms_opt(10, 9, 30).unwrap();
        assert!(dial.set_time(&t));

        dial.set_rotation(Hand::Second, 0.0);
        assert!(!dial.set_time(&t));
        assert_eq!(dial.rotation(Hand::Second), 0.0);
        assert_eq!(dial.shown_time(), Some(t));
    }

    #[test]
    fn set_time_accepts_date_times() {
        let mut dial = default_dial();
        let dt = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(6, 15, 0).unwrap();
        assert!(dial.set_time(&dt));
        assert_eq!(dial.rotation(Hand::Hour), 187.5);
        assert_eq!(dial.rotation(Hand::Minute), 90.0);
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn invalid_geometry_fails_the_build() {
        let geometry = GeometrySpec { hour_hand_length: 400.0, ..GeometrySpec::default() };
        let err = FaceBuilder::new().geometry(geometry).build().unwrap_err();
        assert_eq!(err.field, "hour_hand_length");
    }

    #[test]
    fn palette_colors_reach_the_primitives() {
        let palette = Palette { ticks: dbclock_engine::paint::Color::white(), ..Palette::default() };
        let dial = FaceBuilder::new().palette(palette).build().unwrap();
        let DrawCmd::Rect(tick) = &dial.draw_list().items()[FIRST_TICK].cmd else { panic!() };
        assert_eq!(tick.color, dbclock_engine::paint::Color::white());
    }
}
