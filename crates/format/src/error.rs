//! Rendering errors

use std::io;
use thiserror::Error;

/// Failure while rendering a record
///
/// When this is returned the trailer has still been written, but the
/// record itself may be incomplete: a tag block opened before the failing
/// entry is left open.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing the header or trailer failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A payload entry failed to render
    #[error("failed to render payload entry {index} ({kind}): {source}")]
    Entry {
        /// Position of the entry in the payload
        index: usize,
        /// Variant label of the entry
        kind: &'static str,
        /// Underlying error
        source: io::Error,
    },
}

impl RenderError {
    /// Index of the failing payload entry, if the failure was inside the payload.
    pub fn entry_index(&self) -> Option<usize> {
        match self {
            RenderError::Entry { index, .. } => Some(*index),
            RenderError::Io(_) => None,
        }
    }
}

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;
