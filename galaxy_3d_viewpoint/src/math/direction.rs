/// Direction — a unit-length vector.
///
/// The only fallible step in the math layer lives here: normalizing a
/// zero (or non-finite) vector yields no direction.

use glam::DVec3;
use std::ops::Neg;
use crate::error::{Error, log_and_return_error};

/// Unit vector in 3D space. Invariant: length is 1 (within rounding).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction(DVec3);

impl Direction {
    pub const X: Self = Self(DVec3::X);
    pub const Y: Self = Self(DVec3::Y);
    pub const Z: Self = Self(DVec3::Z);
    pub const NEG_X: Self = Self(DVec3::NEG_X);
    pub const NEG_Y: Self = Self(DVec3::NEG_Y);
    pub const NEG_Z: Self = Self(DVec3::NEG_Z);

    /// Normalize a vector into a direction.
    ///
    /// Returns `None` when the vector has zero or non-finite length.
    pub fn new(vector: DVec3) -> Option<Self> {
        vector.try_normalize().map(Self)
    }

    /// Wrap a vector already known to be unit length.
    ///
    /// Callers must guarantee the invariant (e.g. a rotation of an
    /// existing direction, or the cross product of two orthogonal
    /// directions).
    pub(crate) const fn new_unchecked(vector: DVec3) -> Self {
        Self(vector)
    }

    /// The unit vector.
    pub fn vector(self) -> DVec3 {
        self.0
    }

    pub fn x(self) -> f64 {
        self.0.x
    }

    pub fn y(self) -> f64 {
        self.0.y
    }

    pub fn z(self) -> f64 {
        self.0.z
    }

    /// The opposite direction.
    pub fn reverse(self) -> Self {
        Self(-self.0)
    }

    pub fn dot(self, other: Direction) -> f64 {
        self.0.dot(other.0)
    }

    /// Cross product. Not a direction in general (zero for parallel inputs).
    pub fn cross(self, other: Direction) -> DVec3 {
        self.0.cross(other.0)
    }

    /// Component of `vector` along this direction.
    pub fn component_of(self, vector: DVec3) -> f64 {
        vector.dot(self.0)
    }

    /// Projection of `vector` onto this direction.
    pub fn project(self, vector: DVec3) -> DVec3 {
        self.0 * vector.dot(self.0)
    }

    /// Deterministic unit vector orthogonal to this one.
    ///
    /// Uses glam's branchless construction (Duff et al., "Building an
    /// Orthonormal Basis, Revisited"): the same input always yields the
    /// same output, with no special-cased axes.
    pub fn any_perpendicular(self) -> Self {
        Self(self.0.any_orthonormal_vector())
    }
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        self.reverse()
    }
}

impl From<Direction> for DVec3 {
    fn from(direction: Direction) -> DVec3 {
        direction.0
    }
}

impl TryFrom<DVec3> for Direction {
    type Error = Error;

    fn try_from(vector: DVec3) -> Result<Self, Error> {
        Self::new(vector).ok_or_else(|| log_and_return_error(
            "galaxy3d::Direction",
            Error::DegenerateVector(format!("cannot normalize {:?}", vector)),
        ))
    }
}

#[cfg(test)]
#[path = "direction_tests.rs"]
mod tests;
