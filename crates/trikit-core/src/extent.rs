//! Per-axis quantities: scale factors, ellipse radii and pixel sizes.

use serde::{Deserialize, Serialize};

/// Per-axis scale factor. Negative factors mirror.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn uniform(factor: f64) -> Self {
        Self::new(factor, factor)
    }

    /// The scale that undoes this one. Zero factors stay zero.
    pub fn inverse(&self) -> Self {
        let invert = |v: f64| if v == 0.0 { 0.0 } else { 1.0 / v };
        Self::new(invert(self.x), invert(self.y))
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

/// Ellipse radii.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Radii {
    pub x: f64,
    pub y: f64,
}

impl Radii {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Radii scaled by the magnitude of each factor; radii never go negative.
    pub fn scaled(&self, scale: Scale) -> Self {
        Self::new(self.x * scale.x.abs(), self.y * scale.y.abs())
    }
}

/// Size of a bitmap in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IntSize {
    pub w: u32,
    pub h: u32,
}

impl IntSize {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}
