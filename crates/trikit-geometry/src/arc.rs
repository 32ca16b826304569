//! Elliptical arcs inscribed in a frame.
//!
//! The ellipse has radii `width / 2` and `height / 2`, is centred on the
//! frame and turned by the frame angle. Arcs are approximated with cubic
//! Béziers using L. Maisonobe's control point construction.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use trikit_core::{Point, Radian};

use crate::pathpt::PathPt;
use crate::tri::{center_point, Tri};

/// Start and stop angle of an arc, in the ellipse's own parameter space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AngleSpan {
    pub start: Radian,
    pub stop: Radian,
}

impl AngleSpan {
    pub fn new(start: Radian, stop: Radian) -> Self {
        Self { start, stop }
    }

    pub fn full() -> Self {
        Self::new(0.0, 2.0 * PI)
    }

    pub fn extent(&self) -> Radian {
        (self.stop - self.start).abs()
    }
}

/// Number of Bézier segments used for `span`: two per started quarter turn,
/// at most eight.
pub fn required_curve_count(span: &AngleSpan) -> usize {
    let extent = span.extent();
    if extent <= PI / 2.0 {
        2
    } else if extent <= PI {
        4
    } else if extent <= 3.0 * PI / 2.0 {
        6
    } else {
        8
    }
}

struct Ellipse {
    center: Point,
    rx: f64,
    ry: f64,
    cos_main: f64,
    sin_main: f64,
}

impl Ellipse {
    fn inscribed(tri: &Tri) -> Self {
        let main = tri.angle();
        Self {
            center: center_point(tri),
            rx: tri.width() / 2.0,
            ry: tri.height() / 2.0,
            cos_main: main.cos(),
            sin_main: main.sin(),
        }
    }

    fn at(&self, eta: Radian) -> Point {
        let a = self.rx * eta.cos();
        let b = self.ry * eta.sin();
        Point::new(
            self.center.x + a * self.cos_main - b * self.sin_main,
            self.center.y + a * self.sin_main + b * self.cos_main,
        )
    }

    /// Derivative of [`Ellipse::at`] with respect to `eta`.
    fn tangent(&self, eta: Radian) -> Point {
        let a = self.rx * eta.sin();
        let b = self.ry * eta.cos();
        Point::new(
            -a * self.cos_main - b * self.sin_main,
            -a * self.sin_main + b * self.cos_main,
        )
    }
}

/// The points where the arc starts and stops.
pub fn arc_end_points(tri: &Tri, span: &AngleSpan) -> [Point; 2] {
    let ellipse = Ellipse::inscribed(tri);
    [ellipse.at(span.start), ellipse.at(span.stop)]
}

/// The arc as a `MoveTo` to its start followed by cubic Béziers.
pub fn arc_as_path(tri: &Tri, span: &AngleSpan) -> Vec<PathPt> {
    let ellipse = Ellipse::inscribed(tri);
    let count = required_curve_count(span);
    let step = (span.stop - span.start) / count as f64;
    let t = (0.5 * step).tan();
    let alpha = step.sin() * ((4.0 + 3.0 * t * t).sqrt() - 1.0) / 3.0;

    let mut eta = span.start;
    let mut pos = ellipse.at(eta);
    let mut dot = ellipse.tangent(eta);

    let mut path = Vec::with_capacity(count + 1);
    path.push(PathPt::MoveTo(pos));
    for _ in 0..count {
        let prev = pos;
        let prev_dot = dot;
        eta += step;
        pos = ellipse.at(eta);
        dot = ellipse.tangent(eta);
        path.push(PathPt::cubic_bezier(
            pos,
            prev + prev_dot * alpha,
            pos - dot * alpha,
        ));
    }
    path
}
