//! The `Tri` placement frame.
//!
//! A `Tri` describes where and how a shape sits: an oriented, possibly
//! skewed rectangle given by three corners.
//!
//! ```text
//!   p0 ----------- p1
//!    \              \
//!     \              \
//!     p2 ----------- p3   (derived)
//! ```
//!
//! Mirroring has no separate flag. A vertical flip shows up as a negative
//! height, a horizontal flip as a half-turn angle with a negative height.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::fmt;
use trikit_core::{
    max_coords, min_coords, rad_angle, rotate_point, scale_point, GeometryError, Point, Radian,
    Rect, Scale,
};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tri {
    p0: Point,
    p1: Point,
    p2: Point,
}

impl Tri {
    /// Frame from three explicit corners.
    pub fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self { p0, p1, p2 }
    }

    /// Frame at `origin`, its top edge pointing along `angle`.
    pub fn from_angle(origin: Point, angle: Radian, width: f64, height: f64) -> Self {
        let p1 = origin + Point::new(width * angle.cos(), width * angle.sin());
        let p2 = origin
            + Point::new(
                height * (angle + FRAC_PI_2).cos(),
                height * (angle + FRAC_PI_2).sin(),
            );
        Self::new(origin, p1, p2)
    }

    /// Frame with top edge `p0 -> p1`, `p2` placed `height` along the edge
    /// normal.
    pub fn from_base(p0: Point, p1: Point, height: f64) -> Self {
        let angle = rad_angle(p0, p1) + FRAC_PI_2;
        let p2 = p0 + Point::new(height * angle.cos(), height * angle.sin());
        Self::new(p0, p1, p2)
    }

    pub fn p0(&self) -> Point {
        self.p0
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    pub fn p2(&self) -> Point {
        self.p2
    }

    /// The derived bottom-right corner.
    pub fn p3(&self) -> Point {
        let w = self.width();
        let a = self.angle();
        self.p2 + Point::new(w * a.cos(), w * a.sin())
    }

    /// Direction of the top edge; `0` when `p0 == p1`.
    pub fn angle(&self) -> Radian {
        rad_angle(self.p0, self.p1)
    }

    pub fn width(&self) -> f64 {
        self.p0.distance_to(&self.p1)
    }

    /// Length of the left edge, negative when `p2` is on the far side of
    /// the top edge (mirrored).
    pub fn height(&self) -> f64 {
        let h = self.p0.distance_to(&self.p2);
        let a = self.angle();
        let normal = Point::new(-a.sin(), a.cos());
        if (self.p2 - self.p0).dot(&normal) < 0.0 {
            -h
        } else {
            h
        }
    }

    /// Horizontal offset of `p0` from `p2` in the frame's own orientation.
    pub fn skew(&self) -> f64 {
        let p0 = rotate_point(self.p0, self.p2, -self.angle());
        p0.x - self.p2.x
    }

    /// A frame without width or height.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Width or height within `tolerance` of zero.
    pub fn rather_zero(&self, tolerance: f64) -> bool {
        self.width().abs() <= tolerance || self.height().abs() <= tolerance
    }

    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite()
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        for (name, p) in [("p0", self.p0), ("p1", self.p1), ("p2", self.p2)] {
            if !p.is_finite() {
                return Err(GeometryError::NonFinite {
                    what: format!("tri {}", name),
                });
            }
        }
        Ok(())
    }

    pub fn approx_eq(&self, other: &Tri, tolerance: f64) -> bool {
        self.p0.approx_eq(&other.p0, tolerance)
            && self.p1.approx_eq(&other.p1, tolerance)
            && self.p2.approx_eq(&other.p2, tolerance)
    }

    /// Point-in-frame test over the triangles `(p0, p1, p2)` and
    /// `(p1, p2, p3)`, edges included.
    pub fn contains(&self, pt: Point) -> bool {
        let p3 = self.p3();
        in_triangle(pt, self.p0, self.p1, self.p2) || in_triangle(pt, self.p1, self.p2, p3)
    }

    /// Affine matrix mapping the unit square onto the frame: `(0,0)` to
    /// `p0`, `(1,0)` to `p1`, `(0,1)` to `p2`.
    pub fn unit_transform(&self) -> Matrix3<f64> {
        let u = self.p1 - self.p0;
        let v = self.p2 - self.p0;
        Matrix3::new(u.x, v.x, self.p0.x, u.y, v.y, self.p0.y, 0.0, 0.0, 1.0)
    }

    /// Frame-relative coordinates of `pt`, `(0,0)` at `p0` and `(1,1)` at
    /// `p3`. `None` for frames without area.
    pub fn to_local(&self, pt: Point) -> Option<Point> {
        let inverse = self.unit_transform().try_inverse()?;
        let local = inverse * Vector3::new(pt.x, pt.y, 1.0);
        Some(Point::new(local.x, local.y))
    }
}

impl fmt::Display for Tri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tri({}, {}, {})", self.p0, self.p1, self.p2)
    }
}

fn in_triangle(pt: Point, a: Point, b: Point, c: Point) -> bool {
    let d1 = (b - a).cross(&(pt - a));
    let d2 = (c - b).cross(&(pt - b));
    let d3 = (a - c).cross(&(pt - c));
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

pub fn rotated(tri: &Tri, angle: Radian, origin: Point) -> Tri {
    Tri::new(
        rotate_point(tri.p0, origin, angle),
        rotate_point(tri.p1, origin, angle),
        rotate_point(tri.p2, origin, angle),
    )
}

pub fn scaled(tri: &Tri, scale: Scale, origin: Point) -> Tri {
    Tri::new(
        scale_point(tri.p0, scale, origin),
        scale_point(tri.p1, scale, origin),
        scale_point(tri.p2, scale, origin),
    )
}

/// Shifts the top edge by `dx` along the frame's own horizontal axis.
///
/// `p0` is de-rotated about `p2` and `p1` about `p3`, shifted, then rotated
/// back, which keeps skew independent of the frame's rotation.
pub fn skewed(tri: &Tri, dx: f64) -> Tri {
    let angle = tri.angle();
    let p2 = tri.p2;
    let p3 = tri.p3();
    let mut p0 = rotate_point(tri.p0, p2, -angle);
    let mut p1 = rotate_point(tri.p1, p3, -angle);
    p0.x += dx;
    p1.x += dx;
    Tri::new(
        rotate_point(p0, p2, angle),
        rotate_point(p1, p3, angle),
        p2,
    )
}

pub fn translated(tri: &Tri, dx: f64, dy: f64) -> Tri {
    let off = Point::new(dx, dy);
    Tri::new(tri.p0 + off, tri.p1 + off, tri.p2 + off)
}

/// Translates along the frame's axes instead of the canvas axes.
pub fn offset_aligned(tri: &Tri, x_off: f64, y_off: f64) -> Tri {
    let a = tri.angle();
    let dx = x_off * a.cos() + y_off * (-a).sin();
    let dy = x_off * a.sin() + y_off * a.cos();
    translated(tri, dx, dy)
}

/// All four corners, `p3` last.
pub fn corners(tri: &Tri) -> [Point; 4] {
    [tri.p0, tri.p1, tri.p2, tri.p3()]
}

/// Smallest axis-aligned rectangle holding all four corners.
pub fn bounding_rect(tri: &Tri) -> Rect {
    let [p0, p1, p2, p3] = corners(tri);
    Rect::from_corners(
        min_coords(min_coords(p0, p1), min_coords(p2, p3)),
        max_coords(max_coords(p0, p1), max_coords(p2, p3)),
    )
}

pub fn tri_from_rect(r: &Rect) -> Tri {
    Tri::new(r.top_left(), r.top_right(), r.bottom_left())
}

fn along(tri: &Tri, from: Point, width_factor: f64, height_factor: f64) -> Point {
    let a = tri.angle();
    let w = tri.width() * width_factor;
    let h = tri.height() * height_factor;
    from + Point::new(w * a.cos(), w * a.sin())
        + Point::new(h * (a + FRAC_PI_2).cos(), h * (a + FRAC_PI_2).sin())
}

/// Center of the frame, following its rotation.
pub fn center_point(tri: &Tri) -> Point {
    along(tri, tri.p0, 0.5, 0.5)
}

pub fn mid_p0_p1(tri: &Tri) -> Point {
    along(tri, tri.p0, 0.5, 0.0)
}

pub fn mid_p0_p2(tri: &Tri) -> Point {
    along(tri, tri.p0, 0.0, 0.5)
}

pub fn mid_p1_p3(tri: &Tri) -> Point {
    along(tri, tri.p1, 0.0, 0.5)
}

pub fn mid_p2_p3(tri: &Tri) -> Point {
    along(tri, tri.p2, 0.5, 0.0)
}
