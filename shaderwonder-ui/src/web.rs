//! JavaScript entry points for the magnitude explorer page.

use crate::interaction::{format_readout, PointerInteraction};
use crate::rendering::{BrowserHost, CanvasSurface, ProgressiveRenderer};
use shaderwonder_compute::magnitude::{brightness_from_slider, solve_magnitudes_with};
use shaderwonder_compute::{MagnitudeShader, PatternSearch, MAGNITUDE_CONFIG};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, WheelEvent};

/// Install the panic hook and console logger. Call once at page load.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

/// Explorer state shared between the JS-facing methods and canvas listeners.
struct ExplorerState {
    renderer: ProgressiveRenderer<CanvasSurface, BrowserHost>,
    pointer: PointerInteraction,
    shader: MagnitudeShader,
    search: PatternSearch,
}

impl ExplorerState {
    fn mouse_down(&mut self, event: &MouseEvent) {
        let (x, y) = offset(event);
        self.pointer
            .pointer_down(event.button(), x, y, self.renderer.viewport());
    }

    fn mouse_move(&mut self, event: &MouseEvent) {
        let (x, y) = offset(event);
        if self
            .pointer
            .pointer_move(event.buttons(), x, y, self.renderer.viewport_mut())
        {
            self.renderer.render();
        }
    }

    fn wheel(&mut self, event: &WheelEvent) {
        let (x, y) = offset(event);
        match self
            .pointer
            .wheel(event.delta_y(), x, y, self.renderer.viewport_mut())
        {
            Ok(true) => self.renderer.render(),
            Ok(false) => {}
            Err(e) => log::warn!("ignoring wheel event: {e}"),
        }
    }

    fn apply_shader(&mut self) {
        self.renderer.set_shader(Rc::new(self.shader));
        self.renderer.render();
    }
}

type Listener = Closure<dyn FnMut(Event)>;

/// Canvas wired to the magnitude shader, pointer handlers and solver.
///
/// Drag and wheel listeners are attached to the canvas on construction and
/// detached when the explorer is dropped (`free()` from JS). Every method
/// that changes the picture starts a new render pass.
#[wasm_bindgen]
pub struct MagnitudeExplorer {
    state: Rc<RefCell<ExplorerState>>,
    canvas: HtmlCanvasElement,
    listeners: Vec<(&'static str, Listener)>,
}

#[wasm_bindgen]
impl MagnitudeExplorer {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: &HtmlCanvasElement) -> Result<MagnitudeExplorer, JsValue> {
        let config = MAGNITUDE_CONFIG
            .renderer_config()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let surface = CanvasSurface::new(canvas)?;
        let shader = MagnitudeShader::default();
        let renderer = ProgressiveRenderer::new(config, surface, Rc::new(shader), BrowserHost)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let state = Rc::new(RefCell::new(ExplorerState {
            renderer,
            pointer: PointerInteraction::new(),
            shader,
            search: PatternSearch::default(),
        }));

        let mut explorer = Self {
            state,
            canvas: canvas.clone(),
            listeners: Vec::new(),
        };
        explorer.listen("mousedown", |state, event| {
            state.mouse_down(event.unchecked_ref());
        })?;
        explorer.listen("mousemove", |state, event| {
            state.mouse_move(event.unchecked_ref());
        })?;
        explorer.listen("mouseup", |state, _| state.pointer.pointer_up())?;
        explorer.listen("wheel", |state, event| {
            event.prevent_default();
            state.wheel(event.unchecked_ref());
        })?;

        explorer.render();
        Ok(explorer)
    }

    /// Start a new progressive pass, superseding the current one.
    pub fn render(&self) {
        self.state.borrow().renderer.render();
    }

    /// Value coordinates under the cursor, e.g. `"12.3 4.5"`.
    pub fn readout(&self, x: f64, y: f64) -> String {
        format_readout(self.state.borrow().renderer.pixel_to_value(x, y))
    }

    /// Set the target flux ratio from text input.
    pub fn set_ratio(&self, text: &str) {
        if let Some(value) = parse_target("ratio", text) {
            let mut state = self.state.borrow_mut();
            state.shader.ratio = value;
            state.apply_shader();
        }
    }

    /// Set the target total magnitude from text input.
    pub fn set_total(&self, text: &str) {
        if let Some(value) = parse_target("total", text) {
            let mut state = self.state.borrow_mut();
            state.shader.total = value;
            state.apply_shader();
        }
    }

    pub fn set_ratio_brightness(&self, slider: f64) {
        let mut state = self.state.borrow_mut();
        state.shader.ratio_brightness = brightness_from_slider(slider);
        state.apply_shader();
    }

    pub fn set_total_brightness(&self, slider: f64) {
        let mut state = self.state.borrow_mut();
        state.shader.total_brightness = brightness_from_slider(slider);
        state.apply_shader();
    }

    /// Magnitudes `[m1, m2]` reproducing the current targets.
    pub fn solve(&self) -> Vec<f64> {
        let state = self.state.borrow();
        let (m1, m2) =
            solve_magnitudes_with(&state.search, state.shader.ratio, state.shader.total);
        vec![m1, m2]
    }
}

impl MagnitudeExplorer {
    fn listen(
        &mut self,
        kind: &'static str,
        handler: impl Fn(&mut ExplorerState, &Event) + 'static,
    ) -> Result<(), JsValue> {
        let state = Rc::clone(&self.state);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            handler(&mut state.borrow_mut(), &event);
        }) as Box<dyn FnMut(Event)>);
        self.canvas
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        self.listeners.push((kind, closure));
        Ok(())
    }
}

impl Drop for MagnitudeExplorer {
    fn drop(&mut self) {
        for (kind, closure) in self.listeners.drain(..) {
            _ = self
                .canvas
                .remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
    }
}

fn offset(event: &MouseEvent) -> (f64, f64) {
    (event.offset_x() as f64, event.offset_y() as f64)
}

fn parse_target(name: &str, text: &str) -> Option<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            log::warn!("ignoring {name} input {text:?}");
            None
        }
    }
}
