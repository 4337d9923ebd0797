use shaderwonder_core::{center, Rgba, Shader};

/// Red follows x, green follows y, both saturating at 1.0.
///
/// Shader used when an explorer does not supply its own.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GradientShader;

impl Shader for GradientShader {
    fn shade(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Rgba {
        let (cx, cy) = center(x0, y0, x1, y1);
        // `as u8` truncates and saturates negatives (and NaN) to 0
        let red = (cx * 255.0).min(255.0) as u8;
        let green = (cy * 255.0).min(255.0) as u8;
        Rgba::rgb(red, green, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_black() {
        assert_eq!(GradientShader.shade(0.0, 0.0, 0.0, 0.0), Rgba::rgb(0, 0, 0));
    }

    #[test]
    fn uses_tile_center() {
        // centre (0.5, 0.25)
        let color = GradientShader.shade(0.0, 0.5, 1.0, 0.0);
        assert_eq!(color, Rgba::rgb(127, 63, 0));
    }

    #[test]
    fn saturates_outside_unit_square() {
        assert_eq!(GradientShader.shade(2.0, -1.0, 2.0, -1.0), Rgba::rgb(255, 0, 0));
    }
}
