#[cfg(target_arch = "wasm32")]
pub mod canvas_utils;
mod host;
mod progressive_renderer;
mod render_progress;
mod surface;
pub mod tiles;

#[cfg(target_arch = "wasm32")]
pub use canvas_utils::{BrowserHost, CanvasSurface};
#[cfg(not(target_arch = "wasm32"))]
pub use host::NativeHost;
pub use host::{Host, YieldNow};
pub use progressive_renderer::{ProgressiveRenderer, RenderOutcome};
pub use render_progress::RenderProgress;
pub use surface::{PixelBuffer, Surface};
