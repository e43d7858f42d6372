//! Math module — points, directions, frames and sketch planes.
//!
//! Thin value types over glam's double-precision vectors. Each type
//! carries the invariant its name promises (unit length for
//! `Direction`, right-handed orthonormal axes for `Frame`) so the
//! camera code can rely on it without re-checking.

mod point;
mod direction;
mod orthonormalize;
mod frame;
mod sketch_plane;

pub use point::Point;
pub use direction::Direction;
pub use orthonormalize::{orthonormalize, orthonormalize_pair, DEPENDENCE_TOLERANCE};
pub use frame::{Frame, FRAME_TOLERANCE};
pub use sketch_plane::SketchPlane;

/// Free vector (difference of two points). Plain glam type.
pub type Vector = glam::DVec3;
