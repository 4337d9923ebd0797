//! Pixel space <-> value space mapping.
//!
//! Pixel space has its origin at the top-left corner of the surface with Y
//! growing downward. Value space is the [`LogicalBox`] with Y growing upward,
//! so the vertical axis is flipped on the way through normalized coordinates.

use crate::{ConfigError, LogicalBox, Viewport};

/// Per-pixel value-space step and origin for one render pass.
///
/// Value of pixel edge `(x, y)` is `(x * fx + ox, y * fy + oy)`. `fy` is
/// negative for an unflipped box because pixel Y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelSteps {
    pub fx: f64,
    pub fy: f64,
    pub ox: f64,
    pub oy: f64,
}

impl PixelSteps {
    /// Value-space corners `(x0, y0, x1, y1)` of the pixel span `[x0, x1) × [y0, y1)`.
    pub fn span_to_values(&self, x0: u32, y0: u32, x1: u32, y1: u32) -> (f64, f64, f64, f64) {
        (
            x0 as f64 * self.fx + self.ox,
            y0 as f64 * self.fy + self.oy,
            x1 as f64 * self.fx + self.ox,
            y1 as f64 * self.fy + self.oy,
        )
    }
}

/// Maps between surface pixels and logical values under a pan/zoom viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    width: u32,
    height: u32,
    logical_box: LogicalBox,
    viewport: Viewport,
}

impl CoordinateMapper {
    /// Create a mapper at the identity viewport (scale 1, pan 0).
    pub fn new(width: u32, height: u32, logical_box: LogicalBox) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptySurface { width, height });
        }
        Ok(Self {
            width,
            height,
            logical_box,
            viewport: Viewport::default(),
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn logical_box(&self) -> &LogicalBox {
        &self.logical_box
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Zoom around a pixel anchor. See [`Viewport::zoom_at`].
    pub fn zoom_at(&mut self, anchor: (f64, f64), factor: f64) -> Result<(), ConfigError> {
        self.viewport.zoom_at(anchor, factor)
    }

    /// Value-space coordinates under screen pixel `(px, py)`.
    pub fn pixel_to_value(&self, px: f64, py: f64) -> (f64, f64) {
        let (x, y) = self.viewport.unproject(px, py);
        let nx = x / self.width as f64;
        let ny = 1.0 - y / self.height as f64;
        self.logical_box.denormalize(nx, ny)
    }

    /// Screen pixel showing value-space point `(vx, vy)`.
    pub fn value_to_pixel(&self, vx: f64, vy: f64) -> (f64, f64) {
        let (nx, ny) = self.logical_box.normalize(vx, vy);
        let x = nx * self.width as f64;
        let y = (1.0 - ny) * self.height as f64;
        self.viewport.project(x, y)
    }

    /// Steps for the current viewport, taken from the `(0,0)` and `(width,height)` corners.
    pub fn pixel_steps(&self) -> PixelSteps {
        let (ax, ay) = self.pixel_to_value(0.0, 0.0);
        let (bx, by) = self.pixel_to_value(self.width as f64, self.height as f64);
        PixelSteps {
            fx: (bx - ax) / self.width as f64,
            fy: (by - ay) / self.height as f64,
            ox: ax,
            oy: ay,
        }
    }
}
