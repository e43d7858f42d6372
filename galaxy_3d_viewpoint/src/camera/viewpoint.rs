/// Viewpoint — camera placement derived from eye, focal point and up.
///
/// Wraps a single right-handed frame:
/// - origin = eye point
/// - z = from focal point toward eye (the camera looks down -z)
/// - x = camera right
/// - y = camera local up
///
/// The only way to build one is `Viewpoint::look_at`, so every
/// viewpoint's frame is the product of that construction. Matrices are
/// pure functions of the stored frame and cheap to re-derive.

use crate::math::{orthonormalize, Direction, Frame, Point, SketchPlane};
use super::matrix::{self, Mat4};

/// Camera placement. Immutable, `Copy`, created only by `look_at`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    frame: Frame,
}

impl Viewpoint {
    /// Place a camera at `eye_point` looking toward `focal_point`.
    ///
    /// Never fails. Degenerate inputs fall back to deterministic frames:
    /// - view direction parallel to `up`: z is kept, x/y are
    ///   `Frame::from_z_direction` (roll is undefined)
    /// - eye equals focal point: y is exactly `up`, x/z are
    ///   `Frame::from_y_direction`
    ///
    /// Non-finite coordinates are the caller's responsibility.
    pub fn look_at(eye_point: Point, focal_point: Point, up: Direction) -> Self {
        let z_vector = eye_point - focal_point;
        let y_vector = up.vector();
        let x_vector = y_vector.cross(z_vector);

        if let Some((z, y, x)) = orthonormalize(z_vector, y_vector, x_vector) {
            return Self { frame: Frame::from_orthonormal(eye_point, x, y, z) };
        }

        let frame = match Direction::new(z_vector) {
            Some(z) => {
                crate::viewpoint_debug!(
                    "galaxy3d::Viewpoint",
                    "View direction {:?} parallel to up {:?}, roll chosen arbitrarily",
                    -z.vector(),
                    up.vector()
                );
                Frame::from_z_direction(eye_point, z)
            }
            None => {
                crate::viewpoint_debug!(
                    "galaxy3d::Viewpoint",
                    "Eye and focal point coincide at {:?}, view direction chosen arbitrarily",
                    eye_point.coords()
                );
                Frame::from_y_direction(eye_point, up)
            }
        };

        Self { frame }
    }

    // ===== GETTERS =====

    /// Camera position (frame origin).
    pub fn eye_point(&self) -> Point {
        self.frame.origin()
    }

    /// Unit vector from the eye toward the focal point (reverse of z).
    pub fn view_direction(&self) -> Direction {
        self.frame.z_direction().reverse()
    }

    /// Plane through the eye spanned by x and y.
    ///
    /// Its normal is the reverse of the view direction: it points back
    /// toward the observer.
    pub fn view_plane(&self) -> SketchPlane {
        SketchPlane::xy_of(&self.frame)
    }

    /// Camera right.
    pub fn x_direction(&self) -> Direction {
        self.frame.x_direction()
    }

    /// Camera local up. Equals the `up` passed to `look_at` only when it
    /// was already perpendicular to the view direction.
    pub fn y_direction(&self) -> Direction {
        self.frame.y_direction()
    }

    /// The underlying frame (read-only).
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    // ===== MATRICES =====

    /// World → eye space matrix.
    pub fn view_matrix(&self) -> Mat4 {
        matrix::view_matrix(self)
    }

    /// Object-local → eye space matrix for an object placed at `object_frame`.
    pub fn model_view_matrix(&self, object_frame: &Frame) -> Mat4 {
        matrix::model_view_matrix(object_frame, self)
    }

    /// Eye-space coordinates of a world-space point.
    pub fn to_eye_space(&self, point: Point) -> Point {
        self.frame.point_to_local(point)
    }
}

#[cfg(test)]
#[path = "viewpoint_tests.rs"]
mod tests;
