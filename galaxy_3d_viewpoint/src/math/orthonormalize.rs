/// Gram–Schmidt orthonormalization with a fixed priority order.
///
/// The first vector keeps its direction, the second loses its component
/// along the first, the third loses its components along both. Any
/// stage whose remainder is negligible means the inputs are linearly
/// dependent and no orthonormal set is produced.

use glam::DVec3;
use super::direction::Direction;

/// Remainders shorter than this fraction of their input vector are
/// treated as zero (the input lies in the span of the earlier ones).
pub const DEPENDENCE_TOLERANCE: f64 = 1e-10;

/// Remove the components of `vector` along each (orthonormal) direction
/// in `basis`. Two passes keep the remainder orthogonal to machine
/// precision even after heavy cancellation.
fn reject(vector: DVec3, basis: &[Direction]) -> DVec3 {
    let mut remainder = vector;
    for _ in 0..2 {
        for direction in basis {
            remainder -= direction.project(remainder);
        }
    }
    remainder
}

/// Normalize what is left of `vector` after rejecting `basis`.
fn next_direction(vector: DVec3, basis: &[Direction]) -> Option<Direction> {
    let remainder = reject(vector, basis);
    if remainder.length() <= DEPENDENCE_TOLERANCE * vector.length() {
        return None;
    }
    Direction::new(remainder)
}

/// Orthonormalize two vectors in priority order.
///
/// Returns `None` if `v0` is zero or `v1` is parallel to `v0`.
pub fn orthonormalize_pair(v0: DVec3, v1: DVec3) -> Option<(Direction, Direction)> {
    let d0 = Direction::new(v0)?;
    let d1 = next_direction(v1, &[d0])?;
    Some((d0, d1))
}

/// Orthonormalize three vectors in priority order.
///
/// Returns `None` if the three vectors are linearly dependent.
pub fn orthonormalize(v0: DVec3, v1: DVec3, v2: DVec3) -> Option<(Direction, Direction, Direction)> {
    let (d0, d1) = orthonormalize_pair(v0, v1)?;
    let d2 = next_direction(v2, &[d0, d1])?;
    Some((d0, d1, d2))
}

#[cfg(test)]
#[path = "orthonormalize_tests.rs"]
mod tests;
