//! Rotating sink configuration
//!
//! Configuration comes either as a property map (string keys and values,
//! the way switch deployments describe their loggers) or as a JSON
//! document. Both go through the same validation.
//!
//! | Key | Type | Default |
//! |-----|------|---------|
//! | `file` | path | required in property maps |
//! | `copies` | integer ≥ 0 | 10 |
//! | `maxsize` | integer bytes > 0 | 10 000 000 |
//! | `format` | label | `JSON` |

use crate::error::ConfigError;
use isotrace_format::{format_for_label, JSON_LABEL};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

/// Default number of archived files kept
pub const DEFAULT_COPIES: usize = 10;

/// Default rotation threshold in bytes
pub const DEFAULT_MAXSIZE: u64 = 10_000_000;

/// Configuration of a [`RotatingSink`](crate::RotatingSink)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotateConfig {
    /// Path of the active log file; archives get `.1`, `.2`, ... appended
    pub file: PathBuf,
    /// Archived files kept after rotation
    pub copies: usize,
    /// Size in bytes at which the active file is rotated
    pub maxsize: u64,
    /// Formatter label
    pub format: String,
}

impl Default for RotateConfig {
    fn default() -> Self {
        RotateConfig {
            file: PathBuf::from("log/isotrace.log"),
            copies: DEFAULT_COPIES,
            maxsize: DEFAULT_MAXSIZE,
            format: JSON_LABEL.to_string(),
        }
    }
}

impl RotateConfig {
    /// Configuration for `file` with default limits.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        RotateConfig {
            file: file.into(),
            ..Default::default()
        }
    }

    /// Set the number of archived copies.
    pub fn copies(mut self, copies: usize) -> Self {
        self.copies = copies;
        self
    }

    /// Set the rotation threshold.
    pub fn maxsize(mut self, maxsize: u64) -> Self {
        self.maxsize = maxsize;
        self
    }

    /// Set the formatter label.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Build from a property map.
    ///
    /// `file` is required; other keys fall back to their defaults.
    /// Unknown keys are ignored.
    pub fn from_properties(props: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let file = props
            .get("file")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("file"))?;

        let mut config = RotateConfig::new(file);
        if let Some(v) = props.get("copies") {
            config.copies = parse_number("copies", v)?;
        }
        if let Some(v) = props.get("maxsize") {
            config.maxsize = parse_number("maxsize", v)?;
        }
        if let Some(v) = props.get("format") {
            config.format = v.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON configuration document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: RotateConfig =
            serde_json::from_str(text).map_err(|e| ConfigError::Invalid {
                key: "config",
                value: text.chars().take(64).collect(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check limits and the formatter label.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file.as_os_str().is_empty() {
            return Err(ConfigError::Missing("file"));
        }
        if self.maxsize == 0 {
            return Err(ConfigError::Invalid {
                key: "maxsize",
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if format_for_label(&self.format).is_none() {
            return Err(ConfigError::UnknownFormat(self.format.clone()));
        }
        Ok(())
    }
}

fn parse_number<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
