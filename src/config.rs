//! Application configuration.
//!
//! The configuration is loaded from `$XDG_CONFIG_HOME/xtile/config.json`.
//! The top-level schema is split into sections so the file can grow without
//! breaking backward compatibility.
//!
//! # Example
//!
//! ```json
//! {
//!   "layout": { "gap": 8 },
//!   "tools": { "xdotool": "/usr/bin/xdotool", "wmctrl": "wmctrl" },
//!   "snap": {
//!     "width": 1960,
//!     "height": 1200,
//!     "margin_right": 120,
//!     "margin_top": 120,
//!     "split_gap": 2
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
///
/// Every field is optional: a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Tiling settings.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// External executables.
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Frame used by the `left` / `right` / `full` snap modes.
    #[serde(default)]
    pub snap: SnapConfig,
}

/// Tiling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal gap between neighbouring tiled windows, in pixels.
    pub gap: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { gap: 8 }
    }
}

/// Names (or paths) of the external tools to spawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub xdotool: String,
    pub wmctrl: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            xdotool: "xdotool".into(),
            wmctrl: "wmctrl".into(),
        }
    }
}

/// Snap frame geometry.
///
/// The frame is anchored `margin_right` pixels from the right edge of the
/// display and `margin_top` pixels from the top.  The `left` and `right`
/// halves are separated by `2 × split_gap` pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    pub width: u32,
    pub height: u32,
    pub margin_right: u32,
    pub margin_top: u32,
    pub split_gap: u32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            width: 1960,
            height: 1200,
            margin_right: 120,
            margin_top: 120,
            split_gap: 2,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
