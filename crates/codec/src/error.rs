//! Codec error types

use thiserror::Error;

/// Errors raised while packing or unpacking BCD fields.
///
/// All variants are detected before any output is produced, so a failed
/// call never leaves a partially packed buffer behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input contains a character outside `0`-`9`
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit {
        /// Character index of the offending character
        position: usize,
        /// The character that was found
        found: char,
    },

    /// Input has more digits than the field width allows
    #[error("value has {len} digits, field width is {width}")]
    TooLong {
        /// Number of digits supplied
        len: usize,
        /// Configured field width
        width: usize,
    },

    /// Not enough bytes to decode a field
    #[error("truncated field at offset {offset}: need {needed} bytes, have {available}")]
    Truncated {
        /// Offset the read started at
        offset: usize,
        /// Bytes required for the field
        needed: usize,
        /// Bytes available from the offset
        available: usize,
    },

    /// Packed byte holds a nibble above 9
    #[error("invalid BCD nibble {nibble:#x} in byte at offset {offset}")]
    InvalidNibble {
        /// Absolute offset of the offending byte
        offset: usize,
        /// The nibble value
        nibble: u8,
    },
}

impl CodecError {
    /// Check if this error rejects the caller's digit string.
    ///
    /// Covers both non-decimal characters and over-length input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            CodecError::InvalidDigit { .. } | CodecError::TooLong { .. }
        )
    }

    /// Check if this error was caused by short input on unpack.
    pub fn is_truncated(&self) -> bool {
        matches!(self, CodecError::Truncated { .. })
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
