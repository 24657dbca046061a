//! Unified error type for isotrace.
//!
//! Each crate reports its own error enum; this module folds them into one
//! type for callers that drive several layers at once.

use isotrace_codec::CodecError;
use isotrace_format::RenderError;
use isotrace_sink::{ConfigError, SinkError};
use thiserror::Error;

/// All isotrace errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Field could not be packed or unpacked
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Record rendered partially
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// A `Dump` impl panicked
    #[error("record rendering panicked")]
    RenderPanic,

    /// Configuration rejected
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Sink already closed
    #[error("sink is closed")]
    Closed,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for isotrace operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a field codec error.
    pub fn is_codec(&self) -> bool {
        matches!(self, Error::Codec(_))
    }

    /// Check if a record failed to render.
    ///
    /// The record was still closed with its trailer; later records on the
    /// same output are unaffected.
    pub fn is_render(&self) -> bool {
        matches!(self, Error::Render(_) | Error::RenderPanic)
    }

    /// Check if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

// Convert from sink errors, flattening the layers they wrap
impl From<SinkError> for Error {
    fn from(e: SinkError) -> Self {
        match e {
            SinkError::Io(io) => Error::Io(io),
            SinkError::Config(c) => Error::Config(c),
            SinkError::Render(r) => Error::Render(r),
            SinkError::RenderPanic => Error::RenderPanic,
            SinkError::Closed => Error::Closed,
        }
    }
}
