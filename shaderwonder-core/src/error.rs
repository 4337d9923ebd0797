//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Logical box is degenerate: x range [{min_x}, {max_x}], y range [{min_y}, {max_y}]")]
    DegenerateBox {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },

    #[error("Scale must be positive and finite, got {0}")]
    InvalidScale(f64),

    #[error("Zoom factor must be positive and finite, got {0}")]
    InvalidZoomFactor(f64),

    #[error("Surface must have non-zero dimensions, got {width}x{height}")]
    EmptySurface { width: u32, height: u32 },

    #[error("Minimum interval must be a non-negative number of milliseconds, got {0}")]
    InvalidInterval(f64),
}
