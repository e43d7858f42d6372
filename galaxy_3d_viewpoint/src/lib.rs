/*!
# Galaxy 3D Viewpoint

Camera placement and view-matrix math for the Galaxy3D renderer.

A `Viewpoint` is built from an eye point, a focal point and a global up
direction. Construction always succeeds: when the view direction is
parallel to up, or the eye sits on the focal point, a deterministic
fallback frame is chosen instead of failing. The renderer then reads
view and model-view matrices off the viewpoint as flat column-major
arrays.

## Architecture

- **math**: `Point`, `Direction`, `Frame`, `SketchPlane`, Gram–Schmidt
- **camera**: `Viewpoint::look_at`, accessors, matrix export
- **log**: pluggable logger used for degenerate-case diagnostics

All types are immutable `Copy` values; everything except the global
logger is free of shared state.
*/

// Internal modules
mod error;
pub mod log;
pub mod math;
pub mod camera;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Viewpoint and matrix export
    pub use crate::camera::{look_at, Viewpoint, Mat4, GpuMat4};

    // Logging sub-module (types and logger installation, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger,
        };
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }
}

// Re-export math library at crate root
pub use glam;
