//! The optional JSON config file.

use anyhow::{Context as _, Result};
use grid_engine::{DEFAULT_CONTAINER_WIDTH, GridConstraints, GridMetrics};
use serde::Deserialize;
use std::env;
use std::fs::read;
use std::path::Path;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "GRIDCTL_CONFIG";

/// Grid settings shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Pixel metrics of the grid.
    pub metrics: GridMetrics,
    /// Validation and search bounds.
    pub constraints: GridConstraints,
    /// Container width used for pixel conversions.
    pub container_width: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metrics: GridMetrics::default(),
            constraints: GridConstraints::default(),
            container_width: DEFAULT_CONTAINER_WIDTH,
        }
    }
}

impl Config {
    /// Read a config file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = read(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_slice(&data)
            .with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load from `--config`, then `GRIDCTL_CONFIG`, else defaults.
    ///
    /// # Errors
    /// Returns an error if a named config file cannot be loaded.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => Self::from_file(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }
}
