//! 2D point primitives.
//!
//! `Point` is the floating point coordinate used by all geometry. `IntPoint`
//! is the pixel coordinate handed to raster consumers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A floating point coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Length of the point seen as a vector from the origin.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// True if both coordinates differ by at most `tolerance`.
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    pub fn rounded(&self) -> IntPoint {
        IntPoint::new(self.x.round() as i32, self.y.round() as i32)
    }

    pub fn floored(&self) -> IntPoint {
        IntPoint::new(self.x.floor() as i32, self.y.floor() as i32)
    }

    pub fn ceiled(&self) -> IntPoint {
        IntPoint::new(self.x.ceil() as i32, self.y.ceil() as i32)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// An integer (pixel) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl IntPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn floated(&self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl Add for IntPoint {
    type Output = IntPoint;

    fn add(self, rhs: IntPoint) -> IntPoint {
        IntPoint::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for IntPoint {
    type Output = IntPoint;

    fn sub(self, rhs: IntPoint) -> IntPoint {
        IntPoint::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

pub fn distance(a: Point, b: Point) -> f64 {
    a.distance_to(&b)
}

pub fn mid_point(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Component-wise minimum.
pub fn min_coords(a: Point, b: Point) -> Point {
    Point::new(a.x.min(b.x), a.y.min(b.y))
}

/// Component-wise maximum.
pub fn max_coords(a: Point, b: Point) -> Point {
    Point::new(a.x.max(b.x), a.y.max(b.y))
}

/// Projects `p` onto the infinite line through `a` and `b`.
///
/// A zero-length line projects everything onto `a`.
pub fn projection(p: Point, a: Point, b: Point) -> Point {
    let ab = b - a;
    let len_sq = ab.dot(&ab);
    if len_sq == 0.0 {
        return a;
    }
    let t = (p - a).dot(&ab) / len_sq;
    a + ab * t
}
