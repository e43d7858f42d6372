/// SketchPlane — a 2D drawing plane embedded in 3D.
///
/// Anchored at an origin and spanned by two orthonormal directions.
/// The plane normal is x × y, so a plane built from a frame's x/y axes
/// has that frame's z axis as its normal.

use glam::DVec2;
use super::direction::Direction;
use super::frame::Frame;
use super::point::Point;

/// 2D plane embedded in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchPlane {
    origin: Point,
    x: Direction,
    y: Direction,
}

impl SketchPlane {
    /// Plane through the frame's origin, spanned by its x and y axes.
    pub fn xy_of(frame: &Frame) -> Self {
        Self {
            origin: frame.origin(),
            x: frame.x_direction(),
            y: frame.y_direction(),
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn x_direction(&self) -> Direction {
        self.x
    }

    pub fn y_direction(&self) -> Direction {
        self.y
    }

    /// Plane normal (x × y).
    pub fn normal(&self) -> Direction {
        Direction::new_unchecked(self.x.cross(self.y))
    }

    /// 3D point at plane coordinates (u, v).
    pub fn point_at(&self, u: f64, v: f64) -> Point {
        self.origin + self.x.vector() * u + self.y.vector() * v
    }

    /// Plane coordinates of the orthogonal projection of `point`.
    pub fn project(&self, point: Point) -> DVec2 {
        let offset = point - self.origin;
        DVec2::new(self.x.component_of(offset), self.y.component_of(offset))
    }

    /// Signed distance from the plane, positive on the normal side.
    pub fn signed_distance(&self, point: Point) -> f64 {
        self.normal().component_of(point - self.origin)
    }
}

#[cfg(test)]
#[path = "sketch_plane_tests.rs"]
mod tests;
