/// Matrix export — flat column-major 4×4 matrices for the GPU.
///
/// Both view and model-view matrices are built by expressing a frame
/// relative to the viewpoint's frame and reading off its placement
/// matrix. No 4×4 inverse or product is computed.

use glam::DMat4;
use crate::math::Frame;
use super::viewpoint::Viewpoint;

/// 4×4 matrix, 16 doubles, column-major.
pub type Mat4 = [f64; 16];

/// 4×4 matrix, 16 floats, column-major (uniform buffer layout).
pub type GpuMat4 = [f32; 16];

/// Placement matrix of a frame (frame-local → outer coordinates).
pub fn matrix_of(frame: &Frame) -> Mat4 {
    frame.matrix().to_cols_array()
}

/// World → eye space.
///
/// The world frame expressed in the viewpoint's frame, i.e. the
/// inverse of the viewpoint's placement.
pub fn view_matrix(viewpoint: &Viewpoint) -> Mat4 {
    Frame::WORLD.relative_to(viewpoint.frame()).matrix().to_cols_array()
}

/// Object-local → eye space.
///
/// Equal to `view_matrix(viewpoint) * matrix_of(object_frame)`, computed
/// by expressing the object frame relative to the viewpoint's frame.
pub fn model_view_matrix(object_frame: &Frame, viewpoint: &Viewpoint) -> Mat4 {
    object_frame.relative_to(viewpoint.frame()).matrix().to_cols_array()
}

/// Multiply two column-major matrices (`a * b`).
pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    (DMat4::from_cols_array(a) * DMat4::from_cols_array(b)).to_cols_array()
}

/// Narrow to single precision for upload.
pub fn to_gpu(matrix: &Mat4) -> GpuMat4 {
    matrix.map(|value| value as f32)
}

/// Raw bytes of a GPU matrix, ready for a uniform/push-constant write.
pub fn gpu_bytes(matrix: &GpuMat4) -> &[u8] {
    bytemuck::cast_slice(matrix.as_slice())
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
