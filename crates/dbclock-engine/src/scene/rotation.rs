use crate::coords::Vec2;

/// Handle to a shared rotation slot in a [`RotationTable`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RotationId(u16);

impl RotationId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Slot {
    pivot: Vec2,
    degrees: f32,
}

/// Indexed table of named rotations shared by many draw items.
///
/// Items hold a [`RotationId`] instead of the angle itself, so one
/// [`set`](Self::set) moves every item that references the slot. Angles are
/// stored as given; they are never wrapped into `[0, 360)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RotationTable {
    slots: Vec<Slot>,
}

impl RotationTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a slot rotating around `pivot`, starting at 0°.
    pub fn add(&mut self, pivot: Vec2) -> RotationId {
        let id = RotationId(
            u16::try_from(self.slots.len()).expect("rotation table holds at most u16::MAX slots"),
        );
        self.slots.push(Slot { pivot, degrees: 0.0 });
        id
    }

    /// Sets the angle of a slot. O(1); no draw item is touched.
    #[inline]
    pub fn set(&mut self, id: RotationId, degrees: f32) {
        if let Some(slot) = self.slots.get_mut(id.index()) {
            slot.degrees = degrees;
        } else {
            debug_assert!(false, "unknown rotation id {id:?}");
        }
    }

    /// Current angle in degrees. Unknown ids read as 0°.
    #[inline]
    pub fn degrees(&self, id: RotationId) -> f32 {
        self.slots.get(id.index()).map_or(0.0, |s| s.degrees)
    }

    /// Pivot of a slot. Unknown ids pivot around the origin.
    #[inline]
    pub fn pivot(&self, id: RotationId) -> Vec2 {
        self.slots.get(id.index()).map_or(Vec2::zero(), |s| s.pivot)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
