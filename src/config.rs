use crate::stroke::StrokeWidth;
use crate::tools::Tool;
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Startup configuration. Every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    pub window_title: String,
    pub min_window_size: [f32; 2],
    /// Bitmap size before the first layout pass stretches it to the window
    pub initial_canvas_size: [u32; 2],
    pub tool: Tool,
    /// Opaque RGB
    pub color: [u8; 3],
    pub stroke_width: StrokeWidth,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            window_title: "Sketchpad".to_owned(),
            min_window_size: [800.0, 600.0],
            initial_canvas_size: [800, 600],
            tool: Tool::Pencil,
            color: [0, 0, 0],
            stroke_width: StrokeWidth::default(),
        }
    }
}

impl PaintConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from `SKETCHPAD_CONFIG` if it is set, otherwise defaults.
    /// A broken config file is logged and ignored.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    pub fn color32(&self) -> Color32 {
        let [r, g, b] = self.color;
        Color32::from_rgb(r, g, b)
    }
}

/// Tool settings remembered between runs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeSettings {
    pub tool: Tool,
    pub color: [u8; 3],
    pub stroke_width: StrokeWidth,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self::from(&PaintConfig::default())
    }
}

impl From<&PaintConfig> for StrokeSettings {
    fn from(config: &PaintConfig) -> Self {
        Self {
            tool: config.tool,
            color: config.color,
            stroke_width: config.stroke_width,
        }
    }
}

impl StrokeSettings {
    pub fn color32(&self) -> Color32 {
        let [r, g, b] = self.color;
        Color32::from_rgb(r, g, b)
    }
}
