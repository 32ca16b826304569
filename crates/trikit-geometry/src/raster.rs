//! Bitmap placement.
//!
//! A raster object keeps its pixels untouched and is drawn through its
//! frame. [`raster_placement`] breaks the frame down into the steps a
//! bitmap transform applies in order: skew, scale (with mirroring), then
//! rotation about the frame's `p0`.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use trikit_core::{GeometryError, IntSize, Radian, Scale};

use crate::tri::{rotated, skewed, Tri};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterPlacement {
    /// Rotation about `p0`, within `[-π/2, π/2]` when the bitmap is
    /// mirrored horizontally and `(-π, π]` otherwise.
    pub angle: Radian,
    /// Skew of the frame in canvas units.
    pub skew: f64,
    /// Skew in source bitmap pixels.
    pub skew_pixels: f64,
    /// Lean of the left edge from vertical in source pixels, positive when
    /// the top edge is shifted toward +x.
    pub skew_angle: Radian,
    /// Factors taking the bitmap size to the frame size; negative factors
    /// mirror.
    pub scale: Scale,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
}

impl RasterPlacement {
    /// True if drawing the bitmap needs anything beyond a translation.
    pub fn is_transformed(&self, tolerance: f64) -> bool {
        self.angle.abs() > tolerance
            || self.skew.abs() > tolerance
            || (self.scale.x - 1.0).abs() > tolerance
            || (self.scale.y - 1.0).abs() > tolerance
    }
}

/// Decomposes `tri` for a bitmap of `size` pixels.
///
/// Pixel `(u, v)`, with `v` growing from the `p0` row toward the `p2` row,
/// lands at `p0 + R(angle) * ((u - v * tan(skew_angle)) * scale.x, v * scale.y)`.
/// The `p0` row stays put and later rows shift toward -x for a positive
/// skew.
///
/// Frames carry a horizontal mirror as a half-turn plus a vertical mirror.
/// Bitmap transforms do better with an explicit horizontal flip, so that
/// combination is reported as one: the half-turn is taken out of the angle
/// and both scale factors change sign. Skew is unaffected since a half-turn
/// commutes with a shear.
pub fn raster_placement(tri: &Tri, size: IntSize) -> Result<RasterPlacement, GeometryError> {
    if size.is_empty() {
        return Err(GeometryError::EmptyBitmap {
            width: size.w,
            height: size.h,
        });
    }
    if tri.is_degenerate() {
        return Err(GeometryError::Degenerate {
            width: tri.width(),
            height: tri.height(),
        });
    }

    let mut angle = tri.angle();
    let skew = tri.skew();
    let upright = skewed(&rotated(tri, -angle, tri.p0()), -skew);

    let w = f64::from(size.w);
    let h = f64::from(size.h);
    let skew_pixels = skew / (upright.width() / w);
    let skew_angle = skew_pixels.atan2(h);
    let mut scale = Scale::new(upright.width() / w, upright.height() / h);

    if scale.y < 0.0 && angle.abs() > FRAC_PI_2 {
        angle -= PI.copysign(angle);
        scale = Scale::new(-scale.x, -scale.y);
    }

    Ok(RasterPlacement {
        angle,
        skew,
        skew_pixels,
        skew_angle,
        scale,
        flip_horizontal: scale.x < 0.0,
        flip_vertical: scale.y < 0.0,
    })
}
