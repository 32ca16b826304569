//! Frames that move together.
//!
//! A `TriGroup` holds the frames of several objects and treats them as one
//! object whose frame is their common bounding box. Transforming the group
//! frame re-derives each child frame through the same [`Remap`] used for
//! paths, so a grouped selection resizes, rotates and skews as a unit.

use trikit_core::{Point, Rect};

use crate::adj::Remap;
use crate::tri::{corners, tri_from_rect, Tri};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriGroup {
    tri: Tri,
    children: Vec<Tri>,
}

impl TriGroup {
    pub fn new(children: Vec<Tri>) -> Self {
        Self {
            tri: bounding_frame(&children),
            children,
        }
    }

    /// The group frame the children are stored against.
    pub fn tri(&self) -> Tri {
        self.tri
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The stored child frames, without projection.
    pub fn children(&self) -> &[Tri] {
        &self.children
    }

    pub fn push(&mut self, child: Tri) {
        self.children.push(child);
        self.tri = bounding_frame(&self.children);
    }

    /// The child frames as they appear when the group is placed at `target`.
    pub fn get_tris(&self, target: &Tri) -> Vec<Tri> {
        let remap = Remap::new(&self.tri, target);
        self.children.iter().map(|child| remap.tri(child)).collect()
    }
}

impl From<Vec<Tri>> for TriGroup {
    fn from(children: Vec<Tri>) -> Self {
        Self::new(children)
    }
}

fn bounding_frame(children: &[Tri]) -> Tri {
    let all: Vec<Point> = children.iter().flat_map(corners).collect();
    Rect::bounding(&all)
        .map(|r| tri_from_rect(&r))
        .unwrap_or_default()
}
