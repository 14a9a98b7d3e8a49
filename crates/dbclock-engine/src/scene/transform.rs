use crate::coords::Vec2;

use super::{RotationId, RotationTable};

/// Rotation part of a [`Transform`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Rotation {
    None,
    /// Rotation baked into the item (e.g. a tick mark's position on the dial).
    Fixed { degrees: f32, pivot: Vec2 },
    /// Rotation read from a shared slot at render time.
    Shared(RotationId),
}

/// Local transform of a draw item: translate first, then rotate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translate: Vec2,
    pub rotation: Rotation,
}

impl Transform {
    pub const IDENTITY: Transform = Transform { translate: Vec2::zero(), rotation: Rotation::None };

    #[inline]
    pub const fn translate(offset: Vec2) -> Self {
        Self { translate: offset, rotation: Rotation::None }
    }

    #[inline]
    pub const fn with_rotation(self, rotation: Rotation) -> Self {
        Self { translate: self.translate, rotation }
    }

    /// Angle this transform currently rotates by, in degrees.
    #[inline]
    pub fn degrees(&self, rotations: &RotationTable) -> f32 {
        match self.rotation {
            Rotation::None => 0.0,
            Rotation::Fixed { degrees, .. } => degrees,
            Rotation::Shared(id) => rotations.degrees(id),
        }
    }

    /// Maps a local point into canvas space.
    #[inline]
    pub fn apply(&self, p: Vec2, rotations: &RotationTable) -> Vec2 {
        let p = p + self.translate;
        match self.rotation {
            Rotation::None => p,
            Rotation::Fixed { degrees, pivot } => p.rotated_about(pivot, degrees),
            Rotation::Shared(id) => p.rotated_about(rotations.pivot(id), rotations.degrees(id)),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
