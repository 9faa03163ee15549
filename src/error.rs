//! Game-specific error types.
//!
//! Containment never returns errors: a missing volume or a degenerate value
//! degrades to "no containment this step".  These types are used at load and
//! spawn time so bad configuration is reported once instead of silently
//! misbehaving.
//!
//! ## Usage
//!
//! ```rust
//! use rocket_boost::error::{validate_non_negative, BoostResult};
//!
//! fn check(soft: f32) -> BoostResult<()> {
//!     validate_non_negative("SOFT_ZONE_DISTANCE", soft)?;
//!     Ok(())
//! }
//! # assert!(check(1.5).is_ok());
//! ```

use std::fmt;

/// Top-level error enum for the rocket game.
#[derive(Debug, Clone, PartialEq)]
pub enum BoostError {
    /// A tunable holds a value containment cannot use as given.
    UnsafeConstant {
        name: &'static str,
        value: f32,
        /// Accepted interval, e.g. `[0.0, ∞)`.
        safe_range: &'static str,
    },

    /// The config file exists but could not be parsed.
    ConfigParse {
        path: String,
        message: String,
    },

    /// A waypoint path was configured with too few points to move between.
    TooFewWaypoints {
        /// Actual point count provided.
        got: usize,
        /// Minimum required.
        required: usize,
    },
}

impl fmt::Display for BoostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoostError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "{} = {} is out of range, expected {}",
                name, value, safe_range
            ),
            BoostError::ConfigParse { path, message } => {
                write!(f, "failed to parse {}: {}", path, message)
            }
            BoostError::TooFewWaypoints { got, required } => write!(
                f,
                "waypoint path too short: got {} points, need at least {}",
                got, required
            ),
        }
    }
}

impl std::error::Error for BoostError {}

/// Convenience alias: a `Result` using `BoostError` as the error type.
pub type BoostResult<T> = Result<T, BoostError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if `value` is negative or not finite.
///
/// Soft-zone widths, damping rates and push accelerations all share this
/// range; containment treats a negative width as zero anyway.
pub fn validate_non_negative(name: &'static str, value: f32) -> BoostResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BoostError::UnsafeConstant {
            name,
            value,
            safe_range: "[0.0, ∞)",
        })
    }
}

/// Returns an error if a fixed step duration is not strictly positive.
pub fn validate_step_duration(value: f32) -> BoostResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BoostError::UnsafeConstant {
            name: "STEP_DURATION",
            value,
            safe_range: "(0.0, ∞)",
        })
    }
}

/// Returns an error if a waypoint path has fewer than `required` points.
pub fn validate_waypoint_count(got: usize, required: usize) -> BoostResult<()> {
    if got < required {
        Err(BoostError::TooFewWaypoints { got, required })
    } else {
        Ok(())
    }
}
