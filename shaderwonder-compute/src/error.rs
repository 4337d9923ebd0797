//! Solver error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("Search domain is degenerate: [{lo}, {hi}]")]
    DegenerateDomain { lo: f64, hi: f64 },

    #[error("Need at least one slice per axis")]
    NoSlices,

    #[error("Need at least one iteration")]
    NoIterations,

    #[error("Shrink factor must be in (0, 1], got {0}")]
    InvalidShrink(f64),
}
