//! Camera module — viewpoint construction and matrix export.
//!
//! A `Viewpoint` is built once from eye/focal/up and queried for its
//! axes and matrices. Projection, viewport and culling are left to the
//! renderer that consumes these matrices.

mod viewpoint;
mod matrix;

pub use viewpoint::Viewpoint;
pub use matrix::{
    Mat4, GpuMat4,
    matrix_of, view_matrix, model_view_matrix, multiply, to_gpu, gpu_bytes,
};

use crate::math::{Direction, Point};

/// Free-function form of `Viewpoint::look_at`.
pub fn look_at(eye_point: Point, focal_point: Point, up: Direction) -> Viewpoint {
    Viewpoint::look_at(eye_point, focal_point, up)
}
