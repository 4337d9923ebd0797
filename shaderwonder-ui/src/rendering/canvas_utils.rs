//! Browser canvas surface and scheduling.

use crate::rendering::{Host, Surface};
use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use shaderwonder_core::{PixelRect, Rgba};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Get the current time in milliseconds.
///
/// Falls back to `Date.now()` outside a window (e.g. in a worker without
/// `performance`).
pub fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Get 2D rendering context from canvas.
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("No 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Host backed by the browser event loop.
///
/// Suspends with a zero-delay timeout so queued input events run before the
/// next tile.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn now_ms(&self) -> f64 {
        performance_now()
    }

    fn suspend(&self) -> LocalBoxFuture<'static, ()> {
        Box::pin(TimeoutFuture::new(0))
    }
}

/// Surface painting straight into a canvas 2D context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl CanvasSurface {
    /// Wrap `canvas`, taking its current pixel size.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        Ok(Self {
            ctx: get_2d_context(canvas)?,
            width: canvas.width(),
            height: canvas.height(),
        })
    }
}

impl Surface for CanvasSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }
}
