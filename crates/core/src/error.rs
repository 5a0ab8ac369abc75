//! Error types for Palletizer.

use thiserror::Error;

/// Result type alias for Palletizer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the validating entry points.
///
/// The layout computation itself never fails: degenerate geometry degrades to
/// an empty plan. These variants only surface from `validate` and
/// [`Planner::try_plan`](crate::solver::Planner::try_plan).
#[derive(Debug, Error)]
pub enum Error {
    /// Box dimensions are missing, non-positive or not finite.
    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    /// Pallet dimensions or load ceiling are non-positive or not finite.
    #[error("Invalid pallet: {0}")]
    InvalidPallet(String),
}

/// Returns true if `value` can take part in a layout computation.
pub(crate) fn is_usable_dimension(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
