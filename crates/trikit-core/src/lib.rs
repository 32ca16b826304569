//! # trikit core
//!
//! Point primitives, angle helpers and error types shared by the trikit
//! crates. Everything here is plain value arithmetic: no allocation beyond
//! what the callers pass in, no I/O.

pub mod angle;
pub mod constants;
pub mod error;
pub mod extent;
pub mod point;
pub mod rect;

pub use angle::{rad_angle, rather_zero, rotate_point, scale_point, Radian};
pub use error::{Error, GeometryError, PathError, Result};
pub use extent::{IntSize, Radii, Scale};
pub use point::{distance, max_coords, mid_point, min_coords, projection, IntPoint, Point};
pub use rect::{IntRect, Rect};
