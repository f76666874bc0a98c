//! Timeline Options
//!
//! Construction-time configuration, loadable from JSON or YAML.
//!
//! # Example YAML Format
//!
//! ```yaml
//! offset: 0
//! timestamp: true
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};

/// Options recognised when constructing a [`Timeline`](super::Timeline).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct TimelineOptions {
    /// Reference point in milliseconds replacing the construction time.
    /// `Some(0.0)` is a valid override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,

    /// Attach wall-clock epoch milliseconds to every entry
    pub timestamp: bool,
}

impl TimelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Loads options from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();

        let content = fs::read_to_string(path).map_err(|source| TimelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Options file loaded ({} bytes)", content.len());

        match extension.as_str() {
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            _ => Err(TimelineError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parses an offset given as text, such as a command-line value.
pub fn parse_offset(value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|offset| offset.is_finite())
        .ok_or_else(|| TimelineError::InvalidOffset(value.to_string()))
}
