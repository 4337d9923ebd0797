use crate::rendering::tiles::{generate_tiles, refinement_sizes, total_refinement_tiles};
use crate::rendering::{Host, RenderProgress, Surface};
use shaderwonder_core::{ConfigError, CoordinateMapper, RendererConfig, Shader, Viewport};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

/// How a render pass ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Every refinement level was painted.
    Complete,
    /// A newer pass started; this one stopped at its next suspension point.
    Cancelled,
}

/// Progressive renderer that refines from one surface-sized tile down to
/// single pixels, yielding to the host between tiles.
///
/// Each level repaints the whole surface at half the previous tile size, so
/// the picture sharpens from a mosaic to full detail. Starting a new pass
/// supersedes any pass still in flight.
pub struct ProgressiveRenderer<S: Surface, H: Host> {
    mapper: CoordinateMapper,
    min_interval_ms: f64,
    shader: Rc<dyn Shader>,
    surface: Rc<RefCell<S>>,
    host: H,
    render_id: Rc<Cell<u32>>,
    progress: Rc<Cell<RenderProgress>>,
}

impl<S: Surface, H: Host + Clone> ProgressiveRenderer<S, H> {
    /// Create a renderer for `surface`. Nothing is painted until a pass runs.
    pub fn new(
        config: RendererConfig,
        surface: S,
        shader: Rc<dyn Shader>,
        host: H,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let (width, height) = surface.dimensions();
        let mapper = CoordinateMapper::new(width, height, config.logical_box)?;

        Ok(Self {
            mapper,
            min_interval_ms: config.min_interval_ms,
            shader,
            surface: Rc::new(RefCell::new(surface)),
            host,
            render_id: Rc::new(Cell::new(0)),
            progress: Rc::new(Cell::new(RenderProgress::default())),
        })
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn viewport(&self) -> &Viewport {
        self.mapper.viewport()
    }

    /// Pan/zoom state. Changes apply to the next pass, not the running one.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        self.mapper.viewport_mut()
    }

    pub fn pixel_to_value(&self, px: f64, py: f64) -> (f64, f64) {
        self.mapper.pixel_to_value(px, py)
    }

    pub fn value_to_pixel(&self, vx: f64, vy: f64) -> (f64, f64) {
        self.mapper.value_to_pixel(vx, vy)
    }

    /// Replace the shader used by subsequent passes.
    pub fn set_shader(&mut self, shader: Rc<dyn Shader>) {
        self.shader = shader;
    }

    pub fn surface(&self) -> &Rc<RefCell<S>> {
        &self.surface
    }

    /// Progress of the most recently started pass.
    pub fn progress(&self) -> RenderProgress {
        self.progress.get()
    }

    /// Generation of the most recently started pass.
    pub fn render_id(&self) -> u32 {
        self.render_id.get()
    }

    /// Cancel any in-progress render.
    pub fn cancel(&self) {
        // The pass notices at its next suspension point
        self.render_id.set(self.render_id.get().wrapping_add(1));
    }

    /// Start a new pass, superseding any pass still in flight.
    ///
    /// The viewport is captured now; later pan/zoom changes only affect the
    /// next pass. The returned future does the painting and must be driven by
    /// a single-threaded executor.
    pub fn render_pass(&self) -> impl Future<Output = RenderOutcome> + 'static
    where
        S: 'static,
        H: 'static,
    {
        let render_id = self.render_id.get().wrapping_add(1);
        self.render_id.set(render_id);

        let (width, height) = self.mapper.dimensions();
        let steps = self.mapper.pixel_steps();
        let total_tiles = total_refinement_tiles(width, height);
        self.progress.set(RenderProgress::new(total_tiles));

        log::debug!(
            "render {render_id}: {width}x{height}, {total_tiles} tiles, viewport {:?}",
            self.mapper.viewport()
        );

        // Clone what we need for async block
        let render_id_cell = Rc::clone(&self.render_id);
        let progress = Rc::clone(&self.progress);
        let shader = Rc::clone(&self.shader);
        let surface = Rc::clone(&self.surface);
        let host = self.host.clone();
        let min_interval = self.min_interval_ms;

        async move {
            // Superseded before it was ever polled
            if render_id_cell.get() != render_id {
                return RenderOutcome::Cancelled;
            }

            let start_time = host.now_ms();
            let mut next_free = start_time + min_interval;
            let mut state = RenderProgress::new(total_tiles);

            for square in refinement_sizes(width, height) {
                for tile in generate_tiles(width, height, square) {
                    if host.now_ms() >= next_free {
                        host.suspend().await;
                        if render_id_cell.get() != render_id {
                            log::debug!(
                                "render {render_id}: superseded after {}/{} tiles",
                                state.completed_steps,
                                total_tiles
                            );
                            return RenderOutcome::Cancelled;
                        }
                        let now = host.now_ms();
                        state.elapsed_ms = now - start_time;
                        next_free = now + min_interval;
                    }

                    let (x0, y0, x1, y1) =
                        steps.span_to_values(tile.x, tile.y, tile.right(), tile.bottom());
                    let color = shader.shade(x0, y0, x1, y1);
                    surface.borrow_mut().fill_rect(tile, color);

                    state.advance(square);
                    progress.set(state);
                }
            }

            state.is_complete = true;
            state.elapsed_ms = host.now_ms() - start_time;
            progress.set(state);
            log::debug!("render {render_id}: complete in {:.1}ms", state.elapsed_ms);
            RenderOutcome::Complete
        }
    }

    /// Start a new pass on the browser event loop.
    ///
    /// Returns immediately - rendering happens asynchronously.
    /// Previous render is automatically cancelled.
    #[cfg(target_arch = "wasm32")]
    pub fn render(&self)
    where
        S: 'static,
        H: 'static,
    {
        let pass = self.render_pass();
        wasm_bindgen_futures::spawn_local(async move {
            pass.await;
        });
    }
}
