//! Two-star magnitude models and the explorer shader built on them.
//!
//! `m1` and `m2` are astronomical magnitudes. The flux ratio of the pair is
//! `10^(-0.4 (m1 - m2))` and the combined magnitude is
//! `-2.5 log10(10^(-0.4 m1) + 10^(-0.4 m2))`.

use crate::PatternSearch;
use shaderwonder_core::{center, to_channel, Rgba, Shader};

/// Slider range for the brightness controls.
pub const BRIGHTNESS_SLIDER_RANGE: (f64, f64) = (0.0, 20.0);

/// Initial brightness before any slider input.
pub const DEFAULT_BRIGHTNESS: f64 = 1000.0;

/// Flux ratio of star 1 to star 2.
pub fn calc_ratio(m1: f64, m2: f64) -> f64 {
    10f64.powf(-0.4 * (m1 - m2))
}

/// Combined magnitude of both stars.
pub fn calc_total(m1: f64, m2: f64) -> f64 {
    -2.5 * (10f64.powf(-0.4 * m1) + 10f64.powf(-0.4 * m2)).log10()
}

/// Brightness for a slider position (sliders are logarithmic). Positions
/// outside [`BRIGHTNESS_SLIDER_RANGE`] are clamped to it.
pub fn brightness_from_slider(value: f64) -> f64 {
    let (lo, hi) = BRIGHTNESS_SLIDER_RANGE;
    value.clamp(lo, hi).exp() - 1.0
}

/// Slider position showing `brightness`.
pub fn slider_from_brightness(brightness: f64) -> f64 {
    brightness.ln()
}

/// Find the magnitudes reproducing a target ratio and total with the default
/// search over `[0, 25]`.
pub fn solve_magnitudes(ratio: f64, total: f64) -> (f64, f64) {
    solve_magnitudes_with(&PatternSearch::default(), ratio, total)
}

/// [`solve_magnitudes`] with a caller-configured search.
pub fn solve_magnitudes_with(search: &PatternSearch, ratio: f64, total: f64) -> (f64, f64) {
    let result = search.solve((ratio, total), calc_ratio, calc_total);
    log::info!(
        "solved ratio={ratio} total={total}: m1={:.4} m2={:.4}",
        result.0,
        result.1
    );
    result
}

/// Highlights where each model meets its target.
///
/// Red lights up along `calc_ratio == ratio`, green along
/// `calc_total == total`; their crossing is the solution. Blue is constant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnitudeShader {
    pub ratio: f64,
    pub total: f64,
    pub ratio_brightness: f64,
    pub total_brightness: f64,
}

impl MagnitudeShader {
    pub fn new(ratio: f64, total: f64) -> Self {
        Self {
            ratio,
            total,
            ..Self::default()
        }
    }

    fn intensity(brightness: f64, error: f64) -> u8 {
        to_channel((brightness / (error * error) / 100.0).sqrt())
    }
}

impl Default for MagnitudeShader {
    fn default() -> Self {
        Self {
            ratio: 0.0,
            total: 0.0,
            ratio_brightness: DEFAULT_BRIGHTNESS,
            total_brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

impl Shader for MagnitudeShader {
    fn shade(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Rgba {
        let (cx, cy) = center(x0, y0, x1, y1);
        let e1 = calc_ratio(cx, cy) - self.ratio;
        let e2 = calc_total(cx, cy) - self.total;
        Rgba::rgb(
            Self::intensity(self.ratio_brightness, e1),
            Self::intensity(self.total_brightness, e2),
            255,
        )
    }
}
