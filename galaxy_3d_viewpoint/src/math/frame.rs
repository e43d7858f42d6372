/// Frame — origin plus right-handed orthonormal axes.
///
/// A frame is both a local coordinate system and a rigid placement in
/// world space. `matrix()` maps frame-local coordinates to the
/// coordinates of the space the frame is expressed in, and
/// `relative_to()` re-expresses one frame in another's coordinates,
/// which is how view and model-view matrices are derived without
/// inverting or multiplying 4×4 matrices.

use glam::{DMat4, DVec3};
use crate::error::{Error, Result, log_and_return_error};
use super::direction::Direction;
use super::point::Point;

/// Tolerance for orthogonality and handedness checks in `Frame::new`.
pub const FRAME_TOLERANCE: f64 = 1e-9;

/// Right-handed orthonormal frame. Invariant: x × y = z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    origin: Point,
    x: Direction,
    y: Direction,
    z: Direction,
}

impl Frame {
    /// World frame: origin with the global X, Y, Z axes.
    pub const WORLD: Self = Self::at(Point::ORIGIN);

    /// Frame with the global axes, placed at `origin`.
    pub const fn at(origin: Point) -> Self {
        Self {
            origin,
            x: Direction::X,
            y: Direction::Y,
            z: Direction::Z,
        }
    }

    /// Create a frame from explicit axes.
    ///
    /// # Errors
    ///
    /// - `Error::NotOrthonormal` if any two axes are not orthogonal
    /// - `Error::NotRightHanded` if x × y points along -z
    pub fn new(origin: Point, x: Direction, y: Direction, z: Direction) -> Result<Self> {
        let pairs = [("x", "y", x.dot(y)), ("y", "z", y.dot(z)), ("z", "x", z.dot(x))];
        for (a, b, dot) in pairs {
            if dot.abs() > FRAME_TOLERANCE {
                return Err(log_and_return_error(
                    "galaxy3d::Frame",
                    Error::NotOrthonormal(format!("{} · {} = {}", a, b, dot)),
                ));
            }
        }

        if (x.cross(y) - z.vector()).length() > FRAME_TOLERANCE {
            return Err(log_and_return_error("galaxy3d::Frame", Error::NotRightHanded));
        }

        Ok(Self { origin, x, y, z })
    }

    /// Assemble a frame from axes the caller has already orthonormalized.
    pub(crate) const fn from_orthonormal(origin: Point, x: Direction, y: Direction, z: Direction) -> Self {
        Self { origin, x, y, z }
    }

    /// Frame with the given z axis and deterministic x/y axes.
    ///
    /// x = z.any_perpendicular(), y = z × x.
    pub fn from_z_direction(origin: Point, z: Direction) -> Self {
        let x = z.any_perpendicular();
        let y = Direction::new_unchecked(z.cross(x));
        Self { origin, x, y, z }
    }

    /// Frame with exactly the given y axis and deterministic x/z axes.
    ///
    /// x = y.any_perpendicular(), z = x × y.
    pub fn from_y_direction(origin: Point, y: Direction) -> Self {
        let x = y.any_perpendicular();
        let z = Direction::new_unchecked(x.cross(y));
        Self { origin, x, y, z }
    }

    // ===== GETTERS =====

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn x_direction(&self) -> Direction {
        self.x
    }

    pub fn y_direction(&self) -> Direction {
        self.y
    }

    pub fn z_direction(&self) -> Direction {
        self.z
    }

    // ===== PLACEMENT =====

    /// Same axes, origin moved by `offset`.
    pub fn translate_by(&self, offset: DVec3) -> Self {
        Self { origin: self.origin + offset, ..*self }
    }

    /// Same axes, origin moved to `origin`.
    pub fn move_to(&self, origin: Point) -> Self {
        Self { origin, ..*self }
    }

    // ===== COORDINATE CONVERSION =====

    /// Components of a free vector along this frame's axes.
    pub fn vector_to_local(&self, vector: DVec3) -> DVec3 {
        DVec3::new(
            self.x.component_of(vector),
            self.y.component_of(vector),
            self.z.component_of(vector),
        )
    }

    /// Free vector given in this frame's axes, expressed in the outer space.
    pub fn vector_to_world(&self, local: DVec3) -> DVec3 {
        self.x.vector() * local.x + self.y.vector() * local.y + self.z.vector() * local.z
    }

    /// Coordinates of `point` in this frame.
    pub fn point_to_local(&self, point: Point) -> Point {
        Point::from_coords(self.vector_to_local(point - self.origin))
    }

    /// Point given in this frame's coordinates, expressed in the outer space.
    pub fn point_to_world(&self, local: Point) -> Point {
        self.origin + self.vector_to_world(local.coords())
    }

    /// Express a direction in this frame. Rotations preserve length.
    pub fn direction_to_local(&self, direction: Direction) -> Direction {
        Direction::new_unchecked(self.vector_to_local(direction.vector()))
    }

    /// Express `self` in the coordinates of `other`.
    ///
    /// `Frame::WORLD.relative_to(f)` is the inverse of `f`'s placement,
    /// and `a.relative_to(b).matrix() == b.matrix().inverse() * a.matrix()`.
    pub fn relative_to(&self, other: &Frame) -> Frame {
        Self {
            origin: other.point_to_local(self.origin),
            x: other.direction_to_local(self.x),
            y: other.direction_to_local(self.y),
            z: other.direction_to_local(self.z),
        }
    }

    /// 4×4 placement matrix: columns x, y, z (w = 0) and origin (w = 1).
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_cols(
            self.x.vector().extend(0.0),
            self.y.vector().extend(0.0),
            self.z.vector().extend(0.0),
            self.origin.to_homogeneous(),
        )
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::WORLD
    }
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
