//! Placement jobs for the command-line driver.
//!
//! A job is a path plus a list of frame operations. The operations are
//! applied in order to the path's own frame, and the path is projected at
//! the resulting frame.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};
use trikit_core::{Point, Radian, Radii, Scale};
use trikit_geometry::{
    center_point, offset_aligned, rotated, scaled, skewed, translated, PathPt, Points, Tri,
};
use trikit_settings::{Config, OutputSettings};

/// One change to a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FrameOp {
    /// Turn about `origin`, the frame center when omitted.
    Rotate {
        angle: Radian,
        #[serde(default)]
        origin: Option<Point>,
    },
    /// Scale away from `origin`, the frame's `p0` when omitted.
    Scale {
        sx: f64,
        sy: f64,
        #[serde(default)]
        origin: Option<Point>,
    },
    Skew {
        dx: f64,
    },
    Translate {
        dx: f64,
        dy: f64,
    },
    /// Translate along the frame's own axes.
    OffsetAligned {
        dx: f64,
        dy: f64,
    },
}

impl FrameOp {
    pub fn apply(&self, tri: &Tri) -> Tri {
        match *self {
            FrameOp::Rotate { angle, origin } => {
                rotated(tri, angle, origin.unwrap_or_else(|| center_point(tri)))
            }
            FrameOp::Scale { sx, sy, origin } => {
                scaled(tri, Scale::new(sx, sy), origin.unwrap_or_else(|| tri.p0()))
            }
            FrameOp::Skew { dx } => skewed(tri, dx),
            FrameOp::Translate { dx, dy } => translated(tri, dx, dy),
            FrameOp::OffsetAligned { dx, dy } => offset_aligned(tri, dx, dy),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub path: Vec<PathPt>,
    #[serde(default)]
    pub ops: Vec<FrameOp>,
}

/// The projected path, as full segments or as bare end points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Placed {
    Path(Vec<PathPt>),
    Points(Vec<Point>),
}

/// Final frame, its derived quantities and the projected path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobResult {
    pub tri: Tri,
    pub angle: Radian,
    pub width: f64,
    pub height: f64,
    pub skew: f64,
    pub degenerate: bool,
    pub placed: Placed,
}

impl Job {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid placement job")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job file {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("In job file {}", path.display()))
    }

    /// Applies the operations and projects the path.
    pub fn run(&self, config: &Config) -> anyhow::Result<JobResult> {
        let points = Points::from_path(self.path.clone());
        let start = points.tri();
        debug!(points = points.len(), ops = self.ops.len(), frame = %start, "running job");

        let tri = self.ops.iter().fold(start, |tri, op| op.apply(&tri));
        tri.validate().context("Operations produced an invalid frame")?;

        let degenerate = tri.rather_zero(config.geometry.zero_tolerance);
        if degenerate && !points.is_empty() {
            warn!(frame = %tri, "target frame has no area, path collapses");
        }

        let placed = if config.output.plain_points {
            Placed::Points(points.get_points_dumb(&tri))
        } else {
            Placed::Path(points.get_points(&tri))
        };

        Ok(JobResult {
            tri,
            angle: tri.angle(),
            width: tri.width(),
            height: tri.height(),
            skew: tri.skew(),
            degenerate,
            placed,
        })
    }
}

fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;
    // No "-0.0" in output.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn round_point(p: Point, precision: usize) -> Point {
    Point::new(round_to(p.x, precision), round_to(p.y, precision))
}

impl JobResult {
    /// Copy with every number rounded to `precision` decimals.
    pub fn rounded(&self, precision: usize) -> JobResult {
        let placed = match &self.placed {
            Placed::Path(path) => Placed::Path(
                path.iter()
                    .map(|pt| match *pt {
                        PathPt::ArcTo {
                            p,
                            radii,
                            axis_rotation,
                            large_arc,
                            sweep,
                        } => PathPt::ArcTo {
                            p: round_point(p, precision),
                            radii: Radii::new(
                                round_to(radii.x, precision),
                                round_to(radii.y, precision),
                            ),
                            axis_rotation: round_to(axis_rotation, precision),
                            large_arc,
                            sweep,
                        },
                        other => other.map_points(|p| round_point(p, precision)),
                    })
                    .collect(),
            ),
            Placed::Points(points) => Placed::Points(
                points.iter().map(|p| round_point(*p, precision)).collect(),
            ),
        };
        JobResult {
            tri: Tri::new(
                round_point(self.tri.p0(), precision),
                round_point(self.tri.p1(), precision),
                round_point(self.tri.p2(), precision),
            ),
            angle: round_to(self.angle, precision),
            width: round_to(self.width, precision),
            height: round_to(self.height, precision),
            skew: round_to(self.skew, precision),
            degenerate: self.degenerate,
            placed,
        }
    }
}

/// Formats a result for printing according to `output`.
pub fn render(result: &JobResult, output: &OutputSettings) -> anyhow::Result<String> {
    let rounded = result.rounded(output.precision);
    let text = if output.pretty {
        serde_json::to_string_pretty(&rounded)?
    } else {
        serde_json::to_string(&rounded)?
    };
    Ok(text)
}
