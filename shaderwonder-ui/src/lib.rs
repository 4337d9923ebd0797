//! Progressive canvas rendering for shader explorers.

pub mod interaction;
pub mod rendering;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use interaction::{format_readout, wheel_zoom_factor, PointerInteraction};
pub use rendering::{
    Host, PixelBuffer, ProgressiveRenderer, RenderOutcome, RenderProgress, Surface,
};
