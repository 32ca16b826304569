//! # trikit geometry
//!
//! Placement frames and the paths that follow them. Every drawable object
//! is positioned by a [`Tri`]; moving, resizing, rotating or skewing the
//! object only ever replaces its frame. The object's own geometry is stored
//! once and re-derived for whatever frame it currently has.
//!
//! ## Core Components
//!
//! - **Tri**: oriented, possibly skewed rectangle given by three corners
//! - **Adj**: the scale/rotation/skew/translation between two frames
//! - **PathPt**: one path segment (move, line, cubic, arc, close)
//! - **Points**: a path stored relative to its bounding frame, projected on
//!   demand and memoized
//! - **TriGroup**: child frames that follow a shared group frame
//! - **Arc**: elliptical arcs inscribed in a frame as cubic Béziers
//! - **Raster**: decomposition of a frame into bitmap transform parameters
//!
//! ## Architecture
//!
//! ```text
//! Tri (placement frame)
//!   └── get_adj (frame delta)
//!         └── Remap (skew, translate, scale, rotate)
//!               ├── Points   (paths)
//!               └── TriGroup (child frames)
//!
//! arc_as_path / raster_placement (read a frame directly)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use trikit_core::{Point, Scale};
//! use trikit_geometry::{scaled, Points};
//!
//! let mut points = Points::new();
//! points.append(Point::new(0.0, 0.0));
//! points.append(Point::new(10.0, 0.0));
//! points.append(Point::new(10.0, 10.0));
//!
//! let wider = scaled(&points.tri(), Scale::new(2.0, 1.0), Point::ORIGIN);
//! let placed = points.get_points_dumb(&wider);
//! assert_eq!(placed[1], Point::new(20.0, 0.0));
//! ```

pub mod adj;
pub mod arc;
pub mod group;
pub mod pathpt;
pub mod points;
pub mod raster;
pub mod tri;

pub use adj::{get_adj, Adj, Remap};
pub use arc::{arc_as_path, arc_end_points, required_curve_count, AngleSpan};
pub use group::TriGroup;
pub use pathpt::PathPt;
pub use points::{tri_from_coords, tri_from_points, Points};
pub use raster::{raster_placement, RasterPlacement};
pub use tri::{
    bounding_rect, center_point, corners, mid_p0_p1, mid_p0_p2, mid_p1_p3, mid_p2_p3,
    offset_aligned, rotated, scaled, skewed, translated, tri_from_rect, Tri,
};
