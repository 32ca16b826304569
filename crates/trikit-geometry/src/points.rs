//! Path storage relative to a reference frame.
//!
//! `Points` keeps a path once, expressed in the frame given by its bounding
//! box, and reproduces it at any other placement through [`Remap`]. The
//! last projection is memoized until the next edit.

use std::cell::RefCell;

use trikit_core::{PathError, Point};
use tracing::{debug, trace};

use crate::adj::Remap;
use crate::pathpt::PathPt;
use crate::tri::Tri;

/// Bounding frame of a path: `p0` at the minimum corner, `p1` at
/// `(max.x, min.y)`, `p2` at `(min.x, max.y)`.
///
/// Only end points count, and scanning stops at the first `Close`. An empty
/// path (or one starting with `Close`) gives a zero frame at the origin.
pub fn tri_from_points(points: &[PathPt]) -> Tri {
    bounding_tri(
        points
            .iter()
            .take_while(|pt| !pt.closes_path())
            .filter_map(PathPt::end_point),
    )
}

/// Bounding frame of a plain point list.
pub fn tri_from_coords(points: &[Point]) -> Tri {
    bounding_tri(points.iter().copied())
}

fn bounding_tri(mut points: impl Iterator<Item = Point>) -> Tri {
    let Some(first) = points.next() else {
        return Tri::default();
    };
    let (min, max) = points.fold((first, first), |(min, max), p| {
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    });
    Tri::new(min, Point::new(max.x, min.y), Point::new(min.x, max.y))
}

#[derive(Debug, Clone)]
struct ProjectionCache {
    tri: Tri,
    points: Vec<PathPt>,
}

/// An ordered path stored relative to its bounding frame.
#[derive(Debug, Default)]
pub struct Points {
    tri: Tri,
    points: Vec<PathPt>,
    cache: RefCell<Option<ProjectionCache>>,
}

impl Clone for Points {
    /// Copies the path; the copy starts with an empty cache.
    fn clone(&self) -> Self {
        Self {
            tri: self.tri,
            points: self.points.clone(),
            cache: RefCell::new(None),
        }
    }
}

impl Points {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_path(points: Vec<PathPt>) -> Self {
        Self {
            tri: tri_from_points(&points),
            points,
            cache: RefCell::new(None),
        }
    }

    /// The reference frame the stored points are expressed in.
    pub fn tri(&self) -> Tri {
        self.tri
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The stored points, without projection.
    pub fn raw_points(&self) -> &[PathPt] {
        &self.points
    }

    /// The path as it appears when placed at `tri`.
    ///
    /// Projecting at [`Points::tri`] reproduces the stored points.
    pub fn get_points(&self, tri: &Tri) -> Vec<PathPt> {
        if let Some(cache) = self.cache.borrow().as_ref() {
            if cache.points.len() == self.points.len() && cache.tri == *tri {
                return cache.points.clone();
            }
        }

        trace!(len = self.points.len(), frame = %tri, "projecting path");
        let remap = Remap::new(&self.tri, tri);
        let projected: Vec<PathPt> = self.points.iter().map(|pt| remap.path_pt(*pt)).collect();
        *self.cache.borrow_mut() = Some(ProjectionCache {
            tri: *tri,
            points: projected.clone(),
        });
        projected
    }

    /// End points of the projected path, for hit-testing and snapping.
    /// `Close` segments have no point and are skipped.
    pub fn get_points_dumb(&self, tri: &Tri) -> Vec<Point> {
        self.get_points(tri)
            .iter()
            .filter_map(PathPt::end_point)
            .collect()
    }

    /// Appends a segment; a plain `Point` becomes a `LineTo`.
    pub fn append(&mut self, pt: impl Into<PathPt>) {
        self.points.push(pt.into());
        self.stored_points_changed();
    }

    /// Moves the end point of the last segment, e.g. while the trailing
    /// point of a shape being drawn follows the cursor.
    ///
    /// Takes a point or a segment; only the segment's end point is used and
    /// the last segment keeps its own kind. A `Close` leaves the path as is.
    pub fn adjust_back(&mut self, pt: impl Into<PathPt>) -> Result<(), PathError> {
        let back = self.points.last_mut().ok_or(PathError::Empty)?;
        if let Some(to) = pt.into().end_point() {
            back.set_end_point(to);
            self.stored_points_changed();
        }
        Ok(())
    }

    /// Inserts a segment before `index` (`index == len` appends), acting on
    /// the path as placed at `tri`.
    pub fn insert_point(
        &mut self,
        tri: &Tri,
        pt: impl Into<PathPt>,
        index: usize,
    ) -> Result<(), PathError> {
        self.check_index(index, self.points.len() + 1)?;
        self.points = self.get_points(tri);
        self.points.insert(index, pt.into());
        self.stored_points_changed();
        Ok(())
    }

    /// Removes the segment at `index`, acting on the path as placed at `tri`.
    pub fn remove_point(&mut self, tri: &Tri, index: usize) -> Result<PathPt, PathError> {
        self.check_index(index, self.points.len())?;
        self.points = self.get_points(tri);
        let removed = self.points.remove(index);
        self.stored_points_changed();
        Ok(removed)
    }

    /// Replaces the segment at `index`, acting on the path as placed at `tri`.
    pub fn set_point(
        &mut self,
        tri: &Tri,
        pt: impl Into<PathPt>,
        index: usize,
    ) -> Result<(), PathError> {
        self.check_index(index, self.points.len())?;
        self.points = self.get_points(tri);
        self.points[index] = pt.into();
        self.stored_points_changed();
        Ok(())
    }

    /// Removes and returns the last stored segment, undoing an append.
    pub fn pop_back(&mut self) -> Option<PathPt> {
        let pt = self.points.pop()?;
        self.stored_points_changed();
        Some(pt)
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.stored_points_changed();
    }

    fn check_index(&self, index: usize, bound: usize) -> Result<(), PathError> {
        if index < bound {
            return Ok(());
        }
        debug!(index, len = self.points.len(), "rejected point index");
        Err(PathError::IndexOutOfRange {
            index,
            len: self.points.len(),
        })
    }

    fn stored_points_changed(&mut self) {
        self.tri = tri_from_points(&self.points);
        *self.cache.get_mut() = None;
    }
}

impl From<Vec<PathPt>> for Points {
    fn from(points: Vec<PathPt>) -> Self {
        Self::from_path(points)
    }
}

impl From<Vec<Point>> for Points {
    fn from(points: Vec<Point>) -> Self {
        Self::from_path(points.into_iter().map(PathPt::LineTo).collect())
    }
}
