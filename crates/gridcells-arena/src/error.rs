//! Error types for arena construction.

use gridcells_core::Axis;
use std::error::Error;
use std::fmt;

/// Errors arising from arena construction.
///
/// Every variant describes an invalid configuration: arenas are validated
/// once when built and all later queries are infallible.
#[derive(Clone, Debug, PartialEq)]
pub enum ArenaError {
    /// A size, radius or step was zero or negative.
    NonPositive {
        /// Name of the offending parameter (e.g. `"radius"`, `"step.x"`).
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A size, radius or step was NaN or infinite.
    NonFinite {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The step on an axis is larger than the extent along it, which would
    /// leave the grid with a single point.
    StepExceedsSize {
        /// The degenerate axis.
        axis: Axis,
        /// Requested step along `axis`.
        step: f64,
        /// Extent along `axis`.
        size: f64,
    },
    /// The discretisation would produce more samples on an axis than
    /// [`Extent::MAX_AXIS_POINTS`](crate::Extent::MAX_AXIS_POINTS).
    TooManyPoints {
        /// The oversized axis.
        axis: Axis,
        /// Number of points the step would produce.
        points: f64,
        /// Maximum supported number of points per axis.
        max: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { parameter, value } => {
                write!(f, "invalid arena configuration: {parameter} must be > 0, got {value}")
            }
            Self::NonFinite { parameter, value } => {
                write!(f, "invalid arena configuration: {parameter} must be finite, got {value}")
            }
            Self::StepExceedsSize { axis, step, size } => {
                write!(
                    f,
                    "invalid arena configuration: step {step} on axis {axis} exceeds size {size}"
                )
            }
            Self::TooManyPoints { axis, points, max } => {
                write!(
                    f,
                    "invalid arena configuration: axis {axis} would have {points} points, max {max}"
                )
            }
        }
    }
}

impl Error for ArenaError {}

/// Check that `value` is finite and strictly positive.
pub(crate) fn check_positive(parameter: &'static str, value: f64) -> Result<f64, ArenaError> {
    if !value.is_finite() {
        return Err(ArenaError::NonFinite { parameter, value });
    }
    if value <= 0.0 {
        return Err(ArenaError::NonPositive { parameter, value });
    }
    Ok(value)
}
