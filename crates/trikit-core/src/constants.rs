//! Numeric tolerances.

/// Default threshold below which a length counts as zero.
pub const ZERO_TOLERANCE: f64 = 1e-9;
