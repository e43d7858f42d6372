//! Error types for the Galaxy3D viewpoint crate
//!
//! Only the explicit frame and direction constructors can fail.
//! `Viewpoint::look_at` absorbs every degenerate configuration and never
//! returns one of these.

use std::fmt;

/// Result type for viewpoint math operations
pub type Result<T> = std::result::Result<T, Error>;

/// Viewpoint math errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A vector with zero (or non-finite) length was used where a direction is required
    DegenerateVector(String),

    /// Frame axes are not pairwise orthogonal
    NotOrthonormal(String),

    /// Frame axes are orthonormal but x × y points along -z
    NotRightHanded,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateVector(msg) => write!(f, "Degenerate vector: {}", msg),
            Error::NotOrthonormal(msg) => write!(f, "Frame not orthonormal: {}", msg),
            Error::NotRightHanded => write!(f, "Frame is not right-handed"),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error at ERROR severity, then hand it back for returning
pub(crate) fn log_and_return_error(source: &str, error: Error) -> Error {
    crate::viewpoint_error!(source, "{}", error);
    error
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
