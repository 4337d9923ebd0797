use futures::future::LocalBoxFuture;
use futures::task::noop_waker_ref;
use shaderwonder_compute::{
    calc_ratio, calc_total, solve_magnitudes, MagnitudeShader, MAGNITUDE_CONFIG,
};
use shaderwonder_core::{to_channel, LogicalBox, PixelRect, RendererConfig, Rgba, Shader, Viewport};
use shaderwonder_ui::rendering::tiles::{refinement_sizes, total_refinement_tiles};
use shaderwonder_ui::rendering::{NativeHost, YieldNow};
use shaderwonder_ui::{Host, PixelBuffer, ProgressiveRenderer, RenderOutcome, Surface};
use std::cell::Cell;
use std::future::Future;
use std::pin::pin;
use std::rc::Rc;
use std::task::{Context, Poll};

// ============================================================================
// Test doubles
// ============================================================================

/// Clock advancing 1ms on every read, so passes yield every few tiles.
#[derive(Clone, Default)]
struct SteppingHost {
    now: Rc<Cell<f64>>,
}

impl Host for SteppingHost {
    fn now_ms(&self) -> f64 {
        let t = self.now.get() + 1.0;
        self.now.set(t);
        t
    }

    fn suspend(&self) -> LocalBoxFuture<'static, ()> {
        Box::pin(YieldNow::default())
    }
}

/// Pixel buffer that also counts paints per pixel.
struct RecordingSurface {
    pixels: PixelBuffer,
    paints: Vec<u32>,
    fill_calls: u32,
}

impl RecordingSurface {
    fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: PixelBuffer::new(width, height),
            paints: vec![0; (width * height) as usize],
            fill_calls: 0,
        }
    }

    fn paint_count(&self, x: u32, y: u32) -> u32 {
        let (width, _) = self.pixels.dimensions();
        self.paints[(y * width + x) as usize]
    }
}

impl Surface for RecordingSurface {
    fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        let (width, _) = self.pixels.dimensions();
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.paints[(y * width + x) as usize] += 1;
            }
        }
        self.fill_calls += 1;
        self.pixels.fill_rect(rect, color);
    }
}

/// Colour depends on every corner, so each tile of each level differs.
fn coordinate_shader(x0: f64, y0: f64, x1: f64, y1: f64) -> Rgba {
    Rgba::rgb(
        to_channel(x0 * 40.0),
        to_channel(y0 * 40.0),
        to_channel((x1 - x0).abs() * 100.0 + (y1 - y0).abs() * 50.0),
    )
}

fn config(min_interval_ms: f64) -> RendererConfig {
    RendererConfig {
        min_interval_ms,
        logical_box: LogicalBox::new(0.0, 0.0, 6.0, 4.0).unwrap(),
    }
}

fn stepping_renderer(
    width: u32,
    height: u32,
    min_interval_ms: f64,
) -> ProgressiveRenderer<RecordingSurface, SteppingHost> {
    ProgressiveRenderer::new(
        config(min_interval_ms),
        RecordingSurface::new(width, height),
        Rc::new(coordinate_shader),
        SteppingHost::default(),
    )
    .unwrap()
}

/// Final colour a pixel must have: the shader over its own 1x1 tile.
fn assert_full_resolution<H: Host + Clone>(renderer: &ProgressiveRenderer<RecordingSurface, H>) {
    let steps = renderer.mapper().pixel_steps();
    let surface = renderer.surface().borrow();
    let (width, height) = surface.dimensions();
    for y in 0..height {
        for x in 0..width {
            let (x0, y0, x1, y1) = steps.span_to_values(x, y, x + 1, y + 1);
            assert!(surface.paint_count(x, y) >= 1, "pixel ({x}, {y}) never painted");
            assert_eq!(
                surface.pixels.pixel(x, y),
                coordinate_shader(x0, y0, x1, y1),
                "pixel ({x}, {y}) is not at full resolution"
            );
        }
    }
}

// ============================================================================
// Full coverage
// ============================================================================

#[test]
fn completed_pass_ends_at_full_resolution() {
    let renderer = stepping_renderer(13, 7, 3.0);
    let outcome = futures::executor::block_on(renderer.render_pass());

    assert_eq!(outcome, RenderOutcome::Complete);
    assert_full_resolution(&renderer);
}

#[test]
fn completed_pass_covers_zoomed_and_panned_view() {
    let mut renderer = stepping_renderer(16, 9, 2.0);
    renderer.viewport_mut().zoom_at((4.0, 5.0), 2.25).unwrap();
    renderer.viewport_mut().set_pan(-3.5, 11.0);

    let outcome = futures::executor::block_on(renderer.render_pass());
    assert_eq!(outcome, RenderOutcome::Complete);
    assert_full_resolution(&renderer);
}

#[test]
fn every_level_repaints_every_pixel() {
    let renderer = stepping_renderer(10, 6, 4.0);
    futures::executor::block_on(renderer.render_pass());

    let levels = refinement_sizes(10, 6).count() as u32;
    assert_eq!(levels, 5); // 16, 8, 4, 2, 1

    let surface = renderer.surface().borrow();
    assert_eq!(surface.fill_calls, total_refinement_tiles(10, 6));
    for y in 0..6 {
        for x in 0..10 {
            assert_eq!(surface.paint_count(x, y), levels);
        }
    }
}

#[test]
fn progress_reports_completion() {
    let renderer = stepping_renderer(9, 9, 2.0);
    futures::executor::block_on(renderer.render_pass());

    let progress = renderer.progress();
    assert!(progress.is_complete);
    assert!(progress.at_full_resolution());
    assert_eq!(progress.completed_steps, progress.total_steps);
    assert!(progress.elapsed_ms > 0.0);
}

// ============================================================================
// Cooperative yielding
// ============================================================================

#[test]
fn pass_yields_once_interval_elapses() {
    let renderer = stepping_renderer(8, 8, 5.0);
    let mut cx = Context::from_waker(noop_waker_ref());
    let mut pass = pin!(renderer.render_pass());

    assert!(pass.as_mut().poll(&mut cx).is_pending());
    let painted = renderer.surface().borrow().fill_calls;
    assert!(painted > 0, "first slice paints before yielding");
    assert!(painted < total_refinement_tiles(8, 8));
    assert_eq!(renderer.progress().completed_steps, painted);
}

#[test]
fn zero_interval_yields_before_first_tile() {
    let renderer = stepping_renderer(4, 4, 0.0);
    let mut cx = Context::from_waker(noop_waker_ref());
    let mut pass = pin!(renderer.render_pass());

    assert!(pass.as_mut().poll(&mut cx).is_pending());
    assert_eq!(renderer.surface().borrow().fill_calls, 0);
}

// ============================================================================
// Cancellation
// ============================================================================

#[test]
fn new_pass_cancels_suspended_pass() {
    let renderer = stepping_renderer(8, 6, 5.0);
    let mut cx = Context::from_waker(noop_waker_ref());

    let mut first = pin!(renderer.render_pass());
    assert!(first.as_mut().poll(&mut cx).is_pending());
    let painted_by_first = renderer.surface().borrow().fill_calls;

    let second = renderer.render_pass();

    // First pass resumes, sees the newer generation and stops without painting
    assert_eq!(
        first.as_mut().poll(&mut cx),
        Poll::Ready(RenderOutcome::Cancelled)
    );
    assert_eq!(renderer.surface().borrow().fill_calls, painted_by_first);

    // Second pass alone brings the surface to full resolution
    assert_eq!(futures::executor::block_on(second), RenderOutcome::Complete);
    assert_eq!(
        renderer.surface().borrow().fill_calls,
        painted_by_first + total_refinement_tiles(8, 6)
    );
    assert_full_resolution(&renderer);
}

#[test]
fn cancel_stops_pass_without_replacement() {
    let renderer = stepping_renderer(8, 8, 5.0);
    let mut cx = Context::from_waker(noop_waker_ref());
    let mut pass = pin!(renderer.render_pass());

    assert!(pass.as_mut().poll(&mut cx).is_pending());
    let painted = renderer.surface().borrow().fill_calls;
    renderer.cancel();

    assert_eq!(pass.as_mut().poll(&mut cx), Poll::Ready(RenderOutcome::Cancelled));
    assert_eq!(renderer.surface().borrow().fill_calls, painted);
    assert!(!renderer.progress().is_complete);
}

// ============================================================================
// Viewport capture
// ============================================================================

#[test]
fn pass_uses_viewport_from_its_start() {
    let mut renderer = stepping_renderer(6, 6, 1e9);
    let before = renderer.mapper().pixel_steps();
    let pass = renderer.render_pass();

    *renderer.viewport_mut() = Viewport::new(3.0, 40.0, -2.0).unwrap();
    assert_eq!(futures::executor::block_on(pass), RenderOutcome::Complete);

    let surface = renderer.surface().borrow();
    let (x0, y0, x1, y1) = before.span_to_values(2, 3, 3, 4);
    assert_eq!(surface.pixels.pixel(2, 3), coordinate_shader(x0, y0, x1, y1));
}

// ============================================================================
// Magnitude explorer
// ============================================================================

#[test]
fn magnitude_solution_lights_both_channels() {
    let (m1, m2) = solve_magnitudes(2.0, 10.0);
    assert!((calc_ratio(m1, m2) - 2.0).abs() < 1e-3);
    assert!((calc_total(m1, m2) - 10.0).abs() < 1e-3);

    let shader = MagnitudeShader::new(2.0, 10.0);
    let renderer = ProgressiveRenderer::new(
        MAGNITUDE_CONFIG.renderer_config().unwrap(),
        PixelBuffer::new(100, 100),
        Rc::new(shader),
        NativeHost::new(),
    )
    .unwrap();
    assert_eq!(
        futures::executor::block_on(renderer.render_pass()),
        RenderOutcome::Complete
    );

    let (px, py) = renderer.value_to_pixel(m1, m2);
    let buffer = renderer.surface().borrow();
    let at_solution = buffer.pixel(px as u32, py as u32);
    assert!(at_solution.r > 0 && at_solution.g > 0, "{at_solution:?}");
    assert_eq!(at_solution.b, 255);

    // top-left corner is (m1, m2) = (0, 25): far from both curves
    let corner = buffer.pixel(0, 0);
    assert_eq!(corner, Rgba::rgb(0, 0, 255));
    assert_eq!(corner, shader.shade(0.0, 25.0, 0.25, 24.75));
}
