//! The dump capability
//!
//! Any value that knows how to render itself into a trace implements
//! [`Dump`]. Records hold such values as
//! [`PayloadEntry::Structured`](crate::PayloadEntry::Structured) and the
//! formatter calls back into them while streaming the record.
//!
//! ## Contract
//!
//! `dump(out, indent)` writes exactly one JSON value:
//! - the first line starts with `indent`
//! - deeper lines are indented by the implementation itself, relative to `indent`
//! - no trailing newline or separator (the caller owns those)
//!
//! Only I/O errors may be returned. An implementation whose internal state
//! cannot be rendered faithfully writes a placeholder string instead.

use std::io::{self, Write};
use std::sync::Arc;

/// A value that renders itself as JSON onto an output stream
pub trait Dump: Send + Sync {
    /// Write this value to `out`, starting the first line with `indent`.
    fn dump(&self, out: &mut dyn Write, indent: &str) -> io::Result<()>;
}

impl<T: Dump + ?Sized> Dump for Arc<T> {
    fn dump(&self, out: &mut dyn Write, indent: &str) -> io::Result<()> {
        (**self).dump(out, indent)
    }
}

impl<T: Dump + ?Sized> Dump for Box<T> {
    fn dump(&self, out: &mut dyn Write, indent: &str) -> io::Result<()> {
        (**self).dump(out, indent)
    }
}

/// Render a value into a `String`.
///
/// Convenience for tests and for callers that want a single value rather
/// than a full record.
pub fn dump_to_string(value: &dyn Dump, indent: &str) -> io::Result<String> {
    let mut buf = Vec::new();
    value.dump(&mut buf, indent)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
