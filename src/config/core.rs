use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::formatting::ColorMode;

/// Root configuration structure for lineage-map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LineageConfig {
    /// Answer store location
    #[serde(default)]
    pub store: Option<StoreConfig>,

    /// Decision-table export settings
    #[serde(default)]
    pub export: Option<ExportConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Path of the JSON answer store. Relative paths resolve against the
    /// directory the config file was found in.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Replaces the delimiter wherever it appears inside a cell
    #[serde(default = "default_substitute")]
    pub substitute: String,
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_substitute() -> String {
    ";".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            substitute: default_substitute(),
        }
    }
}

impl ExportConfig {
    /// Single-character delimiter and substitute that differ from each other.
    pub fn validate(&self) -> Result<(char, char), String> {
        let delimiter = single_char(&self.delimiter)
            .ok_or_else(|| format!("delimiter must be one character, got {:?}", self.delimiter))?;
        let substitute = single_char(&self.substitute).ok_or_else(|| {
            format!("substitute must be one character, got {:?}", self.substitute)
        })?;
        if delimiter == substitute {
            return Err(format!(
                "delimiter and substitute must differ (both {delimiter:?})"
            ));
        }
        Ok((delimiter, substitute))
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// auto, always or never
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "auto".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl OutputConfig {
    pub fn color_mode(&self) -> Option<ColorMode> {
        ColorMode::parse(&self.color)
    }
}
