//! Packed BCD encoding and decoding
//!
//! A field of `width` decimal digits occupies `ceil(width / 2)` bytes.
//! Values are right-justified and zero-padded on the left before packing.

use crate::error::{CodecError, Result};

/// Number of bytes a packed field of `width` digits occupies.
pub fn packed_len(width: usize) -> usize {
    width / 2 + width % 2
}

/// Right-justify `digits` in a field of `width` characters using `0`.
///
/// Strings already at or above `width` are returned unchanged.
pub fn zero_pad(digits: &str, width: usize) -> String {
    format!("{:0>width$}", digits, width = width)
}

/// Pack a decimal string into BCD bytes.
///
/// The input is validated before anything is produced: every character
/// must be `0`-`9` and there may be at most `width` of them.
pub fn pack(digits: &str, width: usize) -> Result<Vec<u8>> {
    for (position, found) in digits.chars().enumerate() {
        if !found.is_ascii_digit() {
            return Err(CodecError::InvalidDigit { position, found });
        }
    }
    if digits.len() > width {
        return Err(CodecError::TooLong {
            len: digits.len(),
            width,
        });
    }

    let padded = zero_pad(digits, width);
    let mut nibbles = padded.as_bytes();
    let mut out = Vec::with_capacity(packed_len(width));

    // Odd widths: the first byte carries a single digit in its low nibble
    if width % 2 == 1 {
        out.push(nibbles[0] - b'0');
        nibbles = &nibbles[1..];
    }
    for pair in nibbles.chunks_exact(2) {
        out.push(((pair[0] - b'0') << 4) | (pair[1] - b'0'));
    }

    Ok(out)
}

/// Unpack `width` BCD digits starting at `offset` in `bytes`.
///
/// Returns the `width`-character digit string, including leading zeros.
pub fn unpack(bytes: &[u8], offset: usize, width: usize) -> Result<String> {
    let needed = packed_len(width);
    let available = bytes.len().saturating_sub(offset);
    if offset > bytes.len() || available < needed {
        return Err(CodecError::Truncated {
            offset,
            needed,
            available,
        });
    }

    let mut digits = String::with_capacity(needed * 2);
    let mut skip_leading = width % 2 == 1;
    for (i, byte) in bytes[offset..offset + needed].iter().enumerate() {
        for nibble in [byte >> 4, byte & 0x0f] {
            if skip_leading {
                skip_leading = false;
                continue;
            }
            if nibble > 9 {
                return Err(CodecError::InvalidNibble {
                    offset: offset + i,
                    nibble,
                });
            }
            digits.push(char::from(b'0' + nibble));
        }
    }

    Ok(digits)
}
