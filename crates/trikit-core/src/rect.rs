//! Axis-aligned rectangles.

use serde::{Deserialize, Serialize};

use crate::point::{max_coords, min_coords, IntPoint, Point};

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// The rectangle spanned by two opposite corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let min = min_coords(a, b);
        let max = max_coords(a, b);
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Bounding rectangle of a point set; `None` when empty.
    pub fn bounding(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| {
                (min_coords(min, *p), max_coords(max, *p))
            });
        Some(Self::from_corners(min, max))
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.x + self.w, self.y)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.x, self.y + self.h)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.w, self.y + self.h)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_corners(
            min_coords(self.top_left(), other.top_left()),
            max_coords(self.bottom_right(), other.bottom_right()),
        )
    }

    /// Pixel rectangle covering this rectangle: floors the top-left corner
    /// and ceils the bottom-right one.
    pub fn floiled(&self) -> IntRect {
        let tl = self.top_left().floored();
        let br = self.bottom_right().ceiled();
        let size = br - tl;
        IntRect::new(tl.x, tl.y, size.x, size.y)
    }
}

/// Pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IntRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl IntRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn top_left(&self) -> IntPoint {
        IntPoint::new(self.x, self.y)
    }

    pub fn floated(&self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.w),
            f64::from(self.h),
        )
    }
}
