use std::fmt;

use thiserror::Error;

/// Top-level error type for the Linea geometry library.
#[derive(Debug, Error)]
pub enum LineaError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Identifies which input line a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// The first line (`l1`) of a query.
    First,
    /// The second line (`l2`) of a query.
    Second,
}

impl fmt::Display for LineRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// Why a closest-approach query has no unique answer.
///
/// Both cases are structural properties of the input. Re-running the same
/// query always fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NoSolutionReason {
    #[error("{0} line is degenerate (zero-length direction)")]
    DegenerateLine(LineRole),

    #[error("lines are parallel")]
    Parallel,
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("no unique closest segment: {0}")]
    NoSolution(#[from] NoSolutionReason),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

impl LineaError {
    /// Returns the [`NoSolutionReason`] if this error is a failed
    /// closest-approach query.
    #[must_use]
    pub fn no_solution(&self) -> Option<NoSolutionReason> {
        match self {
            Self::Geometry(GeometryError::NoSolution(reason)) => Some(*reason),
            _ => None,
        }
    }
}

impl From<NoSolutionReason> for LineaError {
    fn from(reason: NoSolutionReason) -> Self {
        GeometryError::NoSolution(reason).into()
    }
}

/// Convenience type alias for results using [`LineaError`].
pub type Result<T> = std::result::Result<T, LineaError>;
