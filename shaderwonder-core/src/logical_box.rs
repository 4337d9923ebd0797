use crate::ConfigError;
use serde::{Deserialize, Serialize};

/// Rectangle in value space shown by the full surface at scale 1, pan 0.
///
/// Serialized as `[min_x, min_y, max_x, max_y]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct LogicalBox {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl LogicalBox {
    /// Create a box, rejecting empty, inverted or non-finite ranges.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, ConfigError> {
        let finite = [min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite());
        if !finite || min_x >= max_x || min_y >= max_y {
            return Err(ConfigError::DegenerateBox {
                min_x,
                min_y,
                max_x,
                max_y,
            });
        }
        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Map normalized `[0,1]` coordinates into the box.
    pub fn denormalize(&self, nx: f64, ny: f64) -> (f64, f64) {
        (
            nx * self.width() + self.min_x,
            ny * self.height() + self.min_y,
        )
    }

    /// Map box coordinates to normalized `[0,1]` coordinates.
    pub fn normalize(&self, vx: f64, vy: f64) -> (f64, f64) {
        (
            (vx - self.min_x) / self.width(),
            (vy - self.min_y) / self.height(),
        )
    }
}

impl Default for LogicalBox {
    fn default() -> Self {
        Self {
            min_x: -0.5,
            min_y: -0.5,
            max_x: 2.0,
            max_y: 2.0,
        }
    }
}

impl TryFrom<[f64; 4]> for LogicalBox {
    type Error = ConfigError;

    fn try_from(value: [f64; 4]) -> Result<Self, Self::Error> {
        let [min_x, min_y, max_x, max_y] = value;
        Self::new(min_x, min_y, max_x, max_y)
    }
}

impl From<LogicalBox> for [f64; 4] {
    fn from(value: LogicalBox) -> Self {
        [value.min_x, value.min_y, value.max_x, value.max_y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_ordered_ranges() {
        let b = LogicalBox::new(0.0, 0.0, 25.0, 10.0).unwrap();
        assert_eq!(b.width(), 25.0);
        assert_eq!(b.height(), 10.0);
    }

    #[test]
    fn new_rejects_inverted_x() {
        let err = LogicalBox::new(1.0, 0.0, 1.0, 2.0).unwrap_err();
        assert!(matches!(err, ConfigError::DegenerateBox { .. }));
    }

    #[test]
    fn new_rejects_inverted_y() {
        assert!(LogicalBox::new(0.0, 3.0, 1.0, 2.0).is_err());
    }

    #[test]
    fn new_rejects_nan() {
        assert!(LogicalBox::new(f64::NAN, 0.0, 1.0, 1.0).is_err());
        assert!(LogicalBox::new(0.0, 0.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn normalize_inverts_denormalize() {
        let b = LogicalBox::new(-0.5, -0.5, 2.0, 2.0).unwrap();
        let (vx, vy) = b.denormalize(0.3, 0.8);
        let (nx, ny) = b.normalize(vx, vy);
        assert!((nx - 0.3).abs() < 1e-12);
        assert!((ny - 0.8).abs() < 1e-12);
    }

    #[test]
    fn deserialize_rejects_degenerate_array() {
        let result: Result<LogicalBox, _> = serde_json::from_str("[0, 0, 0, 1]");
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_from_array() {
        let b: LogicalBox = serde_json::from_str("[0, 0, 25, 25]").unwrap();
        assert_eq!(b, LogicalBox::new(0.0, 0.0, 25.0, 25.0).unwrap());
    }
}
