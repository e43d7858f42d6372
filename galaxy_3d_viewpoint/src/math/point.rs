/// Point — a position in world (or frame-local) space.
///
/// Kept distinct from `Vector` so that point/vector arithmetic stays
/// meaningful: `Point - Point` is a vector, `Point + Vector` is a point.

use glam::{DVec3, DVec4};
use std::ops::{Add, Sub};

/// Position in 3D space. Immutable value type.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(DVec3);

impl Point {
    /// The origin (0, 0, 0).
    pub const ORIGIN: Self = Self(DVec3::ZERO);

    /// Create a point from its coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Create a point from a coordinate vector.
    pub const fn from_coords(coords: DVec3) -> Self {
        Self(coords)
    }

    /// Coordinates as a vector from the origin.
    pub fn coords(self) -> DVec3 {
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

    /// Homogeneous coordinates (w = 1).
    pub fn to_homogeneous(self) -> DVec4 {
        self.0.extend(1.0)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        self.0.distance(other.0)
    }
}

impl From<[f64; 3]> for Point {
    fn from(coords: [f64; 3]) -> Self {
        Self(DVec3::from_array(coords))
    }
}

impl Sub for Point {
    type Output = DVec3;

    fn sub(self, rhs: Point) -> DVec3 {
        self.0 - rhs.0
    }
}

impl Add<DVec3> for Point {
    type Output = Point;

    fn add(self, rhs: DVec3) -> Point {
        Point(self.0 + rhs)
    }
}

impl Sub<DVec3> for Point {
    type Output = Point;

    fn sub(self, rhs: DVec3) -> Point {
        Point(self.0 - rhs)
    }
}

#[cfg(test)]
#[path = "point_tests.rs"]
mod tests;
