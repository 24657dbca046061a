//! Payload entries
//!
//! A record's payload is an ordered list of heterogeneous entries. The
//! variants cover everything producers trace: plain text, errors,
//! structured values, nested arrays and explicit nulls.

use crate::dump::Dump;
use crate::error_desc::ErrorDescription;
use crate::json::write_string;
use crate::NEST_INDENT;
use isotrace_codec::PackedField;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// One element of a record's payload
#[derive(Clone)]
pub enum PayloadEntry {
    /// Plain text, rendered as a JSON string
    Text(String),
    /// Error with cause chain and stack frames
    Error(ErrorDescription),
    /// Any value implementing [`Dump`]
    Structured(Arc<dyn Dump>),
    /// Nested list of entries
    Array(Vec<PayloadEntry>),
    /// Absent value, rendered as `null`
    Null,
}

impl PayloadEntry {
    /// Wrap a dump-capable value.
    pub fn structured(value: impl Dump + 'static) -> Self {
        PayloadEntry::Structured(Arc::new(value))
    }

    /// Build an array entry from anything convertible to entries.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PayloadEntry>,
    {
        PayloadEntry::Array(items.into_iter().map(Into::into).collect())
    }

    /// Short label for the variant, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            PayloadEntry::Text(_) => "text",
            PayloadEntry::Error(_) => "error",
            PayloadEntry::Structured(_) => "structured",
            PayloadEntry::Array(_) => "array",
            PayloadEntry::Null => "null",
        }
    }

    /// Check if this is the null marker
    pub fn is_null(&self) -> bool {
        matches!(self, PayloadEntry::Null)
    }
}

impl Dump for PayloadEntry {
    fn dump(&self, out: &mut dyn Write, indent: &str) -> io::Result<()> {
        match self {
            PayloadEntry::Text(s) => {
                out.write_all(indent.as_bytes())?;
                write_string(out, s)
            }
            PayloadEntry::Error(e) => e.dump(out, indent),
            PayloadEntry::Structured(v) => v.dump(out, indent),
            PayloadEntry::Array(items) => dump_array(out, indent, items),
            PayloadEntry::Null => {
                out.write_all(indent.as_bytes())?;
                out.write_all(b"null")
            }
        }
    }
}

fn dump_array(out: &mut dyn Write, indent: &str, items: &[PayloadEntry]) -> io::Result<()> {
    if items.is_empty() {
        return write!(out, "{}[]", indent);
    }
    let inner = format!("{}{}", indent, NEST_INDENT);
    write!(out, "{}[\n", indent)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.write_all(b",\n")?;
        }
        item.dump(out, &inner)?;
    }
    write!(out, "\n{}]", indent)
}

impl fmt::Debug for PayloadEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadEntry::Text(s) => f.debug_tuple("Text").field(s).finish(),
            PayloadEntry::Error(e) => f.debug_tuple("Error").field(e).finish(),
            PayloadEntry::Structured(_) => f.write_str("Structured(..)"),
            PayloadEntry::Array(items) => f.debug_tuple("Array").field(items).finish(),
            PayloadEntry::Null => f.write_str("Null"),
        }
    }
}

impl From<&str> for PayloadEntry {
    fn from(s: &str) -> Self {
        PayloadEntry::Text(s.to_string())
    }
}

impl From<String> for PayloadEntry {
    fn from(s: String) -> Self {
        PayloadEntry::Text(s)
    }
}

impl From<ErrorDescription> for PayloadEntry {
    fn from(e: ErrorDescription) -> Self {
        PayloadEntry::Error(e)
    }
}

impl From<PackedField> for PayloadEntry {
    fn from(field: PackedField) -> Self {
        PayloadEntry::structured(field)
    }
}

impl From<Vec<PayloadEntry>> for PayloadEntry {
    fn from(items: Vec<PayloadEntry>) -> Self {
        PayloadEntry::Array(items)
    }
}

impl From<Arc<dyn Dump>> for PayloadEntry {
    fn from(value: Arc<dyn Dump>) -> Self {
        PayloadEntry::Structured(value)
    }
}

impl<T: Into<PayloadEntry>> From<Option<T>> for PayloadEntry {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(PayloadEntry::Null)
    }
}
