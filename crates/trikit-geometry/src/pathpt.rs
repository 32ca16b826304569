//! Path segments.
//!
//! A path is an ordered list of `PathPt`. Each variant carries exactly the
//! fields that are meaningful for it; transforms go through
//! [`PathPt::map_points`] so every point-valued field is treated alike.

use serde::{Deserialize, Serialize};
use trikit_core::{rotate_point, scale_point, Point, Radian, Radii, Scale};

/// One segment of a drawable path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PathPt {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier ending at `p` with control points `c` and `d`.
    CubicBezier { p: Point, c: Point, d: Point },
    /// Elliptical arc ending at `p`, SVG arc semantics. `axis_rotation` is
    /// in radians.
    ArcTo {
        p: Point,
        radii: Radii,
        axis_rotation: Radian,
        large_arc: bool,
        sweep: bool,
    },
    Close,
}

impl PathPt {
    pub fn move_to(x: f64, y: f64) -> Self {
        PathPt::MoveTo(Point::new(x, y))
    }

    pub fn line_to(x: f64, y: f64) -> Self {
        PathPt::LineTo(Point::new(x, y))
    }

    pub fn cubic_bezier(p: Point, c: Point, d: Point) -> Self {
        PathPt::CubicBezier { p, c, d }
    }

    pub fn arc_to(
        radii: Radii,
        axis_rotation: Radian,
        large_arc: bool,
        sweep: bool,
        p: Point,
    ) -> Self {
        PathPt::ArcTo {
            p,
            radii,
            axis_rotation,
            large_arc,
            sweep,
        }
    }

    /// The point the segment ends at; `None` for `Close`.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathPt::MoveTo(p) | PathPt::LineTo(p) => Some(p),
            PathPt::CubicBezier { p, .. } | PathPt::ArcTo { p, .. } => Some(p),
            PathPt::Close => None,
        }
    }

    /// Replaces the end point, keeping control points and arc parameters.
    /// No effect on `Close`.
    pub fn set_end_point(&mut self, to: Point) {
        match self {
            PathPt::MoveTo(p) | PathPt::LineTo(p) => *p = to,
            PathPt::CubicBezier { p, .. } | PathPt::ArcTo { p, .. } => *p = to,
            PathPt::Close => {}
        }
    }

    pub fn closes_path(&self) -> bool {
        matches!(self, PathPt::Close)
    }

    pub fn is_move(&self) -> bool {
        matches!(self, PathPt::MoveTo(_))
    }

    pub fn is_line(&self) -> bool {
        matches!(self, PathPt::LineTo(_))
    }

    pub fn is_cubic_bezier(&self) -> bool {
        matches!(self, PathPt::CubicBezier { .. })
    }

    pub fn is_arc(&self) -> bool {
        matches!(self, PathPt::ArcTo { .. })
    }

    /// Applies `f` to every point-valued field (end point, control points).
    /// Arc radii, axis rotation and flags are left alone.
    pub fn map_points(self, mut f: impl FnMut(Point) -> Point) -> PathPt {
        match self {
            PathPt::MoveTo(p) => PathPt::MoveTo(f(p)),
            PathPt::LineTo(p) => PathPt::LineTo(f(p)),
            PathPt::CubicBezier { p, c, d } => PathPt::CubicBezier {
                p: f(p),
                c: f(c),
                d: f(d),
            },
            PathPt::ArcTo {
                p,
                radii,
                axis_rotation,
                large_arc,
                sweep,
            } => PathPt::ArcTo {
                p: f(p),
                radii,
                axis_rotation,
                large_arc,
                sweep,
            },
            PathPt::Close => PathPt::Close,
        }
    }

    /// Rotated about `pivot`; arcs also turn their axis.
    pub fn rotated(self, angle: Radian, pivot: Point) -> PathPt {
        match self.map_points(|p| rotate_point(p, pivot, angle)) {
            PathPt::ArcTo {
                p,
                radii,
                axis_rotation,
                large_arc,
                sweep,
            } => PathPt::ArcTo {
                p,
                radii,
                axis_rotation: axis_rotation + angle,
                large_arc,
                sweep,
            },
            other => other,
        }
    }

    /// Scaled away from `origin`; arc radii follow the factor magnitudes.
    pub fn scaled(self, scale: Scale, origin: Point) -> PathPt {
        match self.map_points(|p| scale_point(p, scale, origin)) {
            PathPt::ArcTo {
                p,
                radii,
                axis_rotation,
                large_arc,
                sweep,
            } => PathPt::ArcTo {
                p,
                radii: radii.scaled(scale),
                axis_rotation,
                large_arc,
                sweep,
            },
            other => other,
        }
    }

    pub fn translated(self, delta: Point) -> PathPt {
        self.map_points(|p| p + delta)
    }

    /// True if all point-valued fields and arc parameters are within
    /// `tolerance` of `other`'s, and both are the same kind of segment.
    pub fn approx_eq(&self, other: &PathPt, tolerance: f64) -> bool {
        match (self, other) {
            (PathPt::MoveTo(a), PathPt::MoveTo(b)) | (PathPt::LineTo(a), PathPt::LineTo(b)) => {
                a.approx_eq(b, tolerance)
            }
            (
                PathPt::CubicBezier { p, c, d },
                PathPt::CubicBezier {
                    p: p2,
                    c: c2,
                    d: d2,
                },
            ) => {
                p.approx_eq(p2, tolerance)
                    && c.approx_eq(c2, tolerance)
                    && d.approx_eq(d2, tolerance)
            }
            (
                PathPt::ArcTo {
                    p,
                    radii,
                    axis_rotation,
                    large_arc,
                    sweep,
                },
                PathPt::ArcTo {
                    p: p2,
                    radii: radii2,
                    axis_rotation: axis_rotation2,
                    large_arc: large_arc2,
                    sweep: sweep2,
                },
            ) => {
                p.approx_eq(p2, tolerance)
                    && (radii.x - radii2.x).abs() <= tolerance
                    && (radii.y - radii2.y).abs() <= tolerance
                    && (axis_rotation - axis_rotation2).abs() <= tolerance
                    && large_arc == large_arc2
                    && sweep == sweep2
            }
            (PathPt::Close, PathPt::Close) => true,
            _ => false,
        }
    }
}

impl From<Point> for PathPt {
    fn from(p: Point) -> Self {
        PathPt::LineTo(p)
    }
}
