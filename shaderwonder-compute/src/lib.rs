//! Shaders and the pattern-search solver used by the explorers.

mod error;
pub mod gradient;
pub mod magnitude;
pub mod solver;

pub use error::SolverError;
pub use gradient::GradientShader;
pub use magnitude::{
    calc_ratio, calc_total, solve_magnitudes, solve_magnitudes_with, MagnitudeShader,
};
pub use solver::{solve, PatternSearch, SolverConfig};

// Re-export core types for convenience
pub use shaderwonder_core::*;
