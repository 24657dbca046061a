//! Sink and configuration errors

use isotrace_format::RenderError;
use thiserror::Error;

/// Invalid or incomplete sink configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Required key not present
    #[error("missing configuration key: {0}")]
    Missing(&'static str),

    /// Key present but its value is unusable
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        /// Configuration key
        key: &'static str,
        /// Value as supplied
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// `format` names no known formatter
    #[error("unknown log format: {0}")]
    UnknownFormat(String),
}

/// Errors from sinks
#[derive(Debug, Error)]
pub enum SinkError {
    /// File I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration rejected
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Record could not be rendered
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// A `Dump` impl panicked while the record was rendered
    #[error("record rendering panicked")]
    RenderPanic,

    /// Sink was closed
    #[error("sink is closed")]
    Closed,
}

/// Result type for sink operations.
pub type Result<T> = std::result::Result<T, SinkError>;
