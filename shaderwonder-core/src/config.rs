//! Renderer configuration and the registry of bundled explorers.

use crate::{ConfigError, LogicalBox};
use serde::{Deserialize, Serialize};

/// Settings fixed at renderer construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Longest stretch of uninterrupted painting before yielding to the host.
    pub min_interval_ms: f64,
    /// Value-space rectangle covered by the surface at scale 1, pan 0.
    pub logical_box: LogicalBox,
}

impl RendererConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_interval_ms.is_finite() && self.min_interval_ms >= 0.0) {
            return Err(ConfigError::InvalidInterval(self.min_interval_ms));
        }
        Ok(())
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: 10.0,
            logical_box: LogicalBox::default(),
        }
    }
}

/// Static description of a bundled explorer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExplorerConfig {
    /// Unique identifier
    pub id: &'static str,
    /// Human-readable name for UI display
    pub display_name: &'static str,
    pub min_interval_ms: f64,
    /// `[min_x, min_y, max_x, max_y]`
    pub logical_box: [f64; 4],
}

impl ExplorerConfig {
    pub fn renderer_config(&self) -> Result<RendererConfig, ConfigError> {
        let config = RendererConfig {
            min_interval_ms: self.min_interval_ms,
            logical_box: LogicalBox::try_from(self.logical_box)?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Two-star magnitude explorer: both axes are magnitudes in `[0, 25]`.
pub static MAGNITUDE_CONFIG: ExplorerConfig = ExplorerConfig {
    id: "magnitude",
    display_name: "Magnitude Explorer",
    min_interval_ms: 100.0,
    logical_box: [0.0, 0.0, 25.0, 25.0],
};

/// Plain colour gradient over the default box.
pub static GRADIENT_CONFIG: ExplorerConfig = ExplorerConfig {
    id: "gradient",
    display_name: "Gradient",
    min_interval_ms: 10.0,
    logical_box: [-0.5, -0.5, 2.0, 2.0],
};

/// Look up an explorer configuration by ID.
pub fn get_explorer_config(id: &str) -> Option<&'static ExplorerConfig> {
    match id {
        "magnitude" => Some(&MAGNITUDE_CONFIG),
        "gradient" => Some(&GRADIENT_CONFIG),
        _ => None,
    }
}
