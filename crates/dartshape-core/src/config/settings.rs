//! Configuration settings
//!
//! Defines the configuration structures loaded from `dartshape.toml`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// File name looked up by [`Settings::discover`]
pub const CONFIG_FILE_NAME: &str = "dartshape.toml";

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for editor/tool consumption
    Json,
}

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Shape scanner settings
    pub scanner: ScannerSettings,
    /// Report output settings
    pub output: OutputSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content)?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load `dartshape.toml` from `dir` if present, otherwise defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            Ok(Self::default())
        }
    }
}

/// Shape scanner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerSettings {
    /// Drop depth-zero generic groups (`<T>`) from the leading text
    pub strip_type_arguments: bool,
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            strip_type_arguments: true,
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputSettings {
    /// Default format when none is given on the command line
    pub format: ReportFormat,
}
