//! Angle helpers and point-level rotation/scaling.
//!
//! All angles are radians. The coordinate system is screen-oriented (y grows
//! downward), so a positive angle turns clockwise on screen.

use crate::extent::Scale;
use crate::point::Point;

/// Angle in radians.
pub type Radian = f64;

/// Angle of the line from `from` to `to`; `0` for coincident points.
pub fn rad_angle(from: Point, to: Point) -> Radian {
    if from == to {
        return 0.0;
    }
    (to.y - from.y).atan2(to.x - from.x)
}

/// Rotates `p` about `center` by `angle` radians.
pub fn rotate_point(p: Point, center: Point, angle: Radian) -> Point {
    let s = angle.sin();
    let c = angle.cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * c - dy * s,
        y: center.y + dx * s + dy * c,
    }
}

/// Scales `p` away from `origin`.
pub fn scale_point(p: Point, scale: Scale, origin: Point) -> Point {
    Point {
        x: (p.x - origin.x) * scale.x + origin.x,
        y: (p.y - origin.y) * scale.y + origin.y,
    }
}

/// True if `value` is within `tolerance` of zero.
pub fn rather_zero(value: f64, tolerance: f64) -> bool {
    value.abs() <= tolerance
}
