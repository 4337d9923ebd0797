//! Pointer drag / wheel zoom handling.
//!
//! Handlers mutate a [`Viewport`] and report whether it changed; callers
//! start a new render pass when it did.

use shaderwonder_core::{ConfigError, Viewport};

/// `MouseEvent.button` value of the primary button.
pub const PRIMARY_BUTTON: i16 = 0;

/// Bit of `MouseEvent.buttons` set while the primary button is held.
pub const PRIMARY_BUTTON_MASK: u16 = 1;

/// Scale change per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.5;

/// Where a drag started: cursor pixel and pan at press time.
#[derive(Clone, Copy, Debug, PartialEq)]
struct DragStart {
    anchor: (f64, f64),
    pan: (f64, f64),
}

/// Drag-to-pan and wheel-to-zoom state machine for one surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerInteraction {
    drag: Option<DragStart>,
}

impl PointerInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Begin a drag if `button` is the primary button.
    pub fn pointer_down(&mut self, button: i16, x: f64, y: f64, viewport: &Viewport) {
        if button != PRIMARY_BUTTON {
            return;
        }
        self.drag = Some(DragStart {
            anchor: (x, y),
            pan: (viewport.pan_x, viewport.pan_y),
        });
    }

    /// Follow the cursor while dragging.
    ///
    /// `buttons` is the held-button mask; a move without the primary button
    /// ends the drag (the release happened outside the surface). Returns true
    /// when the pan changed.
    pub fn pointer_move(&mut self, buttons: u16, x: f64, y: f64, viewport: &mut Viewport) -> bool {
        if buttons & PRIMARY_BUTTON_MASK == 0 {
            self.drag = None;
        }
        let Some(start) = self.drag else {
            return false;
        };
        viewport.set_pan(
            start.pan.0 + x - start.anchor.0,
            start.pan.1 + y - start.anchor.1,
        );
        true
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Zoom one notch around the cursor. Returns true when the scale changed.
    pub fn wheel(
        &self,
        delta_y: f64,
        x: f64,
        y: f64,
        viewport: &mut Viewport,
    ) -> Result<bool, ConfigError> {
        let Some(factor) = wheel_zoom_factor(delta_y) else {
            return Ok(false);
        };
        viewport.zoom_at((x, y), factor)?;
        Ok(true)
    }
}

/// Zoom factor for a wheel delta: scrolling up zooms in. `None` for a
/// zero (e.g. purely horizontal) delta.
pub fn wheel_zoom_factor(delta_y: f64) -> Option<f64> {
    if delta_y < 0.0 {
        Some(WHEEL_ZOOM_STEP)
    } else if delta_y > 0.0 {
        Some(1.0 / WHEEL_ZOOM_STEP)
    } else {
        None
    }
}

/// Cursor readout: both values to one decimal, trailing `.0` dropped.
pub fn format_readout(value: (f64, f64)) -> String {
    format!("{} {}", round_tenth(value.0), round_tenth(value.1))
}

fn round_tenth(v: f64) -> f64 {
    // + 0.0 turns -0 into 0
    (v * 10.0).round() / 10.0 + 0.0
}
