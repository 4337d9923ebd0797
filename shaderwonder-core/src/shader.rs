//! Shader trait: maps a value-space rectangle to a colour.

use crate::Rgba;

/// Colour evaluator called once per tile.
///
/// Receives the tile's value-space corners `(x0, y0)` (top-left pixel edge)
/// and `(x1, y1)` (bottom-right pixel edge). Because pixel Y grows downward,
/// `y0 > y1` for an unflipped box. Implementations should be effectively
/// pure: the renderer may call them many times per frame.
pub trait Shader {
    fn shade(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Rgba;
}

impl<F> Shader for F
where
    F: Fn(f64, f64, f64, f64) -> Rgba,
{
    fn shade(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Rgba {
        self(x0, y0, x1, y1)
    }
}

/// Centre of a value-space rectangle.
pub fn center(x0: f64, y0: f64, x1: f64, y1: f64) -> (f64, f64) {
    ((x0 + x1) * 0.5, (y0 + y1) * 0.5)
}
