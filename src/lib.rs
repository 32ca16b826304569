//! # trikit
//!
//! A parametric shape-transform engine: every drawable object is placed by
//! a three-point frame, and its path geometry is re-derived from that frame
//! whenever the object is moved, resized, rotated or skewed.
//!
//! ## Architecture
//!
//! trikit is organized as a workspace with multiple crates:
//!
//! 1. **trikit-core** - Points, rectangles, angle helpers, error types
//! 2. **trikit-geometry** - Frames, frame adjustment, frame-relative paths,
//!    grouped frames, arc approximation, raster placement
//! 3. **trikit-settings** - Configuration files and validation
//! 4. **trikit** - Logging bootstrap and the placement job driver

pub mod job;

pub use trikit_core::{Error, GeometryError, PathError, Point, Result};
pub use trikit_geometry::{get_adj, Adj, PathPt, Points, Tri, TriGroup};
pub use trikit_settings::{Config, LoggingSettings};

pub use job::{render, FrameOp, Job, JobResult, Placed};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout only carries results
/// - Pretty or JSON formatting
/// - RUST_LOG environment variable support, falling back to the configured level
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use anyhow::Context;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)
            .with_context(|| format!("Invalid log level '{}'", settings.level))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    if settings.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);
        registry.with(fmt_layer).try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();
        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}
