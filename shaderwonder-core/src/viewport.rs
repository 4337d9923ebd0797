use crate::ConfigError;
use serde::{Deserialize, Deserializer, Serialize};

/// Pan/zoom state of the surface.
///
/// A point at surface-local pixel `p` (before transform) lands on screen at
/// `p * scale + pan`. Both pan components are raw pixel offsets. Scale is
/// always finite and positive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Viewport {
    scale: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Viewport {
    /// Create viewport, rejecting non-positive or non-finite scale.
    pub fn new(scale: f64, pan_x: f64, pan_y: f64) -> Result<Self, ConfigError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ConfigError::InvalidScale(scale));
        }
        Ok(Self {
            scale,
            pan_x,
            pan_y,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Replace the scale, keeping the pan. Rejects non-positive or non-finite
    /// values and leaves the viewport untouched.
    pub fn set_scale(&mut self, scale: f64) -> Result<(), ConfigError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ConfigError::InvalidScale(scale));
        }
        self.scale = scale;
        Ok(())
    }

    /// Undo pan and scale: screen pixel to surface-local pixel.
    pub fn unproject(&self, px: f64, py: f64) -> (f64, f64) {
        ((px - self.pan_x) / self.scale, (py - self.pan_y) / self.scale)
    }

    /// Apply scale then pan: surface-local pixel to screen pixel.
    pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.scale + self.pan_x, y * self.scale + self.pan_y)
    }

    /// Zoom by `factor`, keeping whatever is under `anchor` in place.
    pub fn zoom_at(&mut self, anchor: (f64, f64), factor: f64) -> Result<(), ConfigError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(ConfigError::InvalidZoomFactor(factor));
        }
        let new_scale = self.scale * factor;
        if !(new_scale.is_finite() && new_scale > 0.0) {
            return Err(ConfigError::InvalidScale(new_scale));
        }
        let (ax, ay) = anchor;
        let (ox, oy) = self.unproject(ax, ay);
        self.scale = new_scale;
        self.pan_x = ax - ox * new_scale;
        self.pan_y = ay - oy * new_scale;
        Ok(())
    }

    /// Replace the pan offset.
    pub fn set_pan(&mut self, pan_x: f64, pan_y: f64) {
        self.pan_x = pan_x;
        self.pan_y = pan_y;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl<'de> Deserialize<'de> for Viewport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Fields {
            scale: f64,
            pan_x: f64,
            pan_y: f64,
        }

        let Fields {
            scale,
            pan_x,
            pan_y,
        } = Fields::deserialize(deserializer)?;
        Self::new(scale, pan_x, pan_y).map_err(serde::de::Error::custom)
    }
}
