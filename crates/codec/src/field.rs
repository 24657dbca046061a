//! Fixed-width numeric field packager
//!
//! [`NumericField`] describes a field layout (width plus a human-readable
//! description); [`PackedField`] binds a field number and value to a layout
//! so it can be traced alongside its packed bytes.

use crate::bcd::{pack, packed_len, unpack};
use crate::error::Result;

/// Packager for a fixed-width BCD numeric field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericField {
    width: usize,
    description: String,
}

impl NumericField {
    /// Create a packager for `width` decimal digits.
    pub fn new(width: usize, description: impl Into<String>) -> Self {
        NumericField {
            width,
            description: description.into(),
        }
    }

    /// Number of decimal digits in the field
    pub fn width(&self) -> usize {
        self.width
    }

    /// Human-readable description of the field
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Bytes the packed field occupies
    pub fn max_packed_len(&self) -> usize {
        packed_len(self.width)
    }

    /// Pack `digits` into this field's layout.
    pub fn pack(&self, digits: &str) -> Result<Vec<u8>> {
        pack(digits, self.width)
    }

    /// Unpack this field from `bytes` at `offset`.
    ///
    /// Returns the digit string and the number of bytes consumed.
    pub fn unpack(&self, bytes: &[u8], offset: usize) -> Result<(String, usize)> {
        let digits = unpack(bytes, offset, self.width)?;
        Ok((digits, self.max_packed_len()))
    }
}

/// A numbered field value together with its BCD layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedField {
    id: u32,
    digits: String,
    width: usize,
}

impl PackedField {
    /// Create a field. The value is validated lazily by [`PackedField::packed`].
    pub fn new(id: u32, digits: impl Into<String>, width: usize) -> Self {
        PackedField {
            id,
            digits: digits.into(),
            width,
        }
    }

    /// Decode a field from wire bytes at `offset`.
    pub fn decode(id: u32, bytes: &[u8], offset: usize, width: usize) -> Result<Self> {
        let digits = unpack(bytes, offset, width)?;
        Ok(PackedField { id, digits, width })
    }

    /// Field number
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Value as supplied (not padded)
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Field width in digits
    pub fn width(&self) -> usize {
        self.width
    }

    /// Packed BCD bytes
    pub fn packed(&self) -> Result<Vec<u8>> {
        pack(&self.digits, self.width)
    }

    /// Packed bytes as uppercase hex
    pub fn hex(&self) -> Result<String> {
        self.packed().map(hex::encode_upper)
    }
}
