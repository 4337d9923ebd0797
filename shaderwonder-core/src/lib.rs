pub mod color;
pub mod config;
pub mod coordinate_mapper;
pub mod error;
pub mod logical_box;
pub mod pixel_rect;
pub mod shader;
pub mod viewport;

pub use color::{to_channel, Rgba};
pub use config::{
    get_explorer_config, ExplorerConfig, RendererConfig, GRADIENT_CONFIG, MAGNITUDE_CONFIG,
};
pub use coordinate_mapper::{CoordinateMapper, PixelSteps};
pub use error::ConfigError;
pub use logical_box::LogicalBox;
pub use pixel_rect::PixelRect;
pub use shader::{center, Shader};
pub use viewport::Viewport;
