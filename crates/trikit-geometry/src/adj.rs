//! Frame-to-frame adjustment.
//!
//! [`get_adj`] decomposes the change between two frames into scale,
//! rotation, skew and translation. [`Remap`] applies that decomposition to
//! individual points, path segments and child frames, and is the only place
//! the remapping order (skew, translate, scale, rotate) is written down.

use serde::{Deserialize, Serialize};
use trikit_core::{rotate_point, scale_point, Point, Radian, Scale};

use crate::pathpt::PathPt;
use crate::tri::{skewed, Tri};

/// The delta that carries points expressed relative to one frame into
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adj {
    pub scale_x: f64,
    pub scale_y: f64,
    pub angle_delta: Radian,
    pub skew_delta: f64,
    pub translate: Point,
}

impl Adj {
    pub const IDENTITY: Adj = Adj {
        scale_x: 1.0,
        scale_y: 1.0,
        angle_delta: 0.0,
        skew_delta: 0.0,
        translate: Point::ORIGIN,
    };

    pub fn scale(&self) -> Scale {
        Scale::new(self.scale_x, self.scale_y)
    }

    pub fn is_identity(&self, tolerance: f64) -> bool {
        (self.scale_x - 1.0).abs() <= tolerance
            && (self.scale_y - 1.0).abs() <= tolerance
            && self.angle_delta.abs() <= tolerance
            && self.skew_delta.abs() <= tolerance
            && self.translate.approx_eq(&Point::ORIGIN, tolerance)
    }
}

impl Default for Adj {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Computes the adjustment from `from` to `to`.
///
/// Both frames are de-skewed first since skew and rotation do not commute.
/// A source frame without width (or height) gets scale factor 1 on that
/// axis.
pub fn get_adj(from: &Tri, to: &Tri) -> Adj {
    let from_b = skewed(from, -from.skew());
    let to_b = skewed(to, -to.skew());

    let scale_x = if from_b.width() == 0.0 {
        1.0
    } else {
        to_b.width() / from_b.width()
    };
    let scale_y = if from_b.height() == 0.0 {
        1.0
    } else {
        to_b.height() / from_b.height()
    };

    Adj {
        scale_x,
        scale_y,
        angle_delta: to_b.angle() - from_b.angle(),
        skew_delta: to.skew() - from.skew(),
        translate: to_b.p3() - from_b.p3(),
    }
}

/// A prepared mapping from a reference frame to a target frame.
///
/// Each point goes through, in order:
/// 1. skew distribution along the reference frame's vertical extent
/// 2. translation by the adjustment
/// 3. scaling about the target's `p3`
/// 4. rotation about the target's `p3` by the target angle
///
/// Skew distribution measures height along the canvas y axis, so the
/// reference frame must be unrotated. Frames built by
/// [`crate::points::tri_from_points`] always are.
#[derive(Debug, Clone, Copy)]
pub struct Remap {
    adj: Adj,
    baseline: f64,
    reference_height: f64,
    pivot: Point,
    angle: Radian,
}

impl Remap {
    pub fn new(reference: &Tri, target: &Tri) -> Self {
        Self {
            adj: get_adj(reference, target),
            baseline: reference.p2().y,
            reference_height: reference.height(),
            pivot: target.p3(),
            angle: target.angle(),
        }
    }

    pub fn adj(&self) -> &Adj {
        &self.adj
    }

    fn skew_and_translate(&self, mut p: Point) -> Point {
        // Frames squashed to no width or height cannot carry skew.
        if self.reference_height != 0.0 && self.adj.scale_x != 0.0 {
            p.x += self.adj.skew_delta * ((self.baseline - p.y) / self.reference_height)
                / self.adj.scale_x;
        }
        p + self.adj.translate
    }

    pub fn point(&self, p: Point) -> Point {
        let p = scale_point(self.skew_and_translate(p), self.adj.scale(), self.pivot);
        rotate_point(p, self.pivot, self.angle)
    }

    /// Maps every point-valued field of a segment. Arc radii follow the
    /// scale and the arc axis follows the rotation; arc flags are kept.
    pub fn path_pt(&self, pt: PathPt) -> PathPt {
        pt.map_points(|p| self.skew_and_translate(p))
            .scaled(self.adj.scale(), self.pivot)
            .rotated(self.angle, self.pivot)
    }

    /// Maps the three stored corners of a child frame.
    pub fn tri(&self, tri: &Tri) -> Tri {
        Tri::new(
            self.point(tri.p0()),
            self.point(tri.p1()),
            self.point(tri.p2()),
        )
    }
}
