//! BCD field codec for isotrace
//!
//! Packs fixed-width decimal strings into binary-coded decimal bytes and back.
//! Two digits share one byte, high nibble first:
//!
//! | Digits | Width | Bytes |
//! |--------|-------|-------|
//! | `"1234"` | 10 | `00 00 00 12 34` |
//! | `"123"` | 3 | `01 23` |
//! | `""` | 4 | `00 00` |
//!
//! Odd widths leave the leading nibble of the first byte at zero.
//!
//! ## Examples
//!
//! ```
//! use isotrace_codec::{pack, unpack};
//!
//! let bytes = pack("1234", 10).unwrap();
//! assert_eq!(bytes, vec![0x00, 0x00, 0x00, 0x12, 0x34]);
//!
//! let digits = unpack(&bytes, 0, 10).unwrap();
//! assert_eq!(digits, "0000001234");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bcd;
pub mod error;
pub mod field;

pub use bcd::{pack, packed_len, unpack, zero_pad};
pub use error::{CodecError, Result};
pub use field::{NumericField, PackedField};
