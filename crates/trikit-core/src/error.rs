//! Error handling for trikit
//!
//! The geometry engine is closed-form math, so the taxonomy is narrow:
//! - Path errors (index-addressed edits on a point sequence)
//! - Geometry errors (non-finite input, degenerate frames where one is not allowed)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Path edit error type
///
/// Returned by index-addressed edits on a stored point sequence. These
/// usually indicate a caller bug, e.g. a UI asking to remove a point that
/// no longer exists after an undo.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The index does not address a stored point
    #[error("Point index {index} out of range for path with {len} points")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of stored points.
        len: usize,
    },

    /// The operation needs at least one stored point
    #[error("Path has no points")]
    Empty,
}

/// Geometry error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A coordinate was NaN or infinite
    #[error("Non-finite coordinate in {what}")]
    NonFinite {
        /// What held the coordinate.
        what: String,
    },

    /// A frame without width or height was used where area is required
    #[error("Degenerate frame (width {width}, height {height})")]
    Degenerate {
        /// The frame width.
        width: f64,
        /// The frame height.
        height: f64,
    },

    /// A bitmap with zero pixels in one dimension
    #[error("Bitmap has no area: {width}x{height}")]
    EmptyBitmap {
        /// Bitmap width in pixels.
        width: u32,
        /// Bitmap height in pixels.
        height: u32,
    },
}

/// Main error type for trikit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Path edit error
    #[error(transparent)]
    Path(#[from] PathError),

    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a path edit error
    pub fn is_path_error(&self) -> bool {
        matches!(self, Error::Path(_))
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
