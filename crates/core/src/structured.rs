//! Ready-made structured payload values

use crate::dump::Dump;
use crate::json::write_string;
use crate::payload::PayloadEntry;
use crate::NEST_INDENT;
use isotrace_codec::PackedField;
use std::io::{self, Write};

/// A tagged, optionally named value
///
/// Renders as `{"tag":..,"name":..,"value":..}` where the value is any
/// payload entry, so messages can nest arbitrarily.
#[derive(Debug, Clone)]
pub struct SimpleMsg {
    tag: String,
    name: Option<String>,
    value: PayloadEntry,
}

impl SimpleMsg {
    /// Create a message.
    pub fn new(tag: impl Into<String>, name: Option<&str>, value: impl Into<PayloadEntry>) -> Self {
        SimpleMsg {
            tag: tag.into(),
            name: name.map(str::to_string),
            value: value.into(),
        }
    }

    /// Message tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Message name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Message value
    pub fn value(&self) -> &PayloadEntry {
        &self.value
    }
}

impl Dump for SimpleMsg {
    fn dump(&self, out: &mut dyn Write, indent: &str) -> io::Result<()> {
        let inner = format!("{}{}", indent, NEST_INDENT);
        let deeper = format!("{}{}", inner, NEST_INDENT);

        write!(out, "{}{{\n{}\"tag\":", indent, inner)?;
        write_string(out, &self.tag)?;
        if let Some(name) = &self.name {
            write!(out, ",\n{}\"name\":", inner)?;
            write_string(out, name)?;
        }
        write!(out, ",\n{}\"value\":\n", inner)?;
        self.value.dump(out, &deeper)?;
        write!(out, "\n{}}}", indent)
    }
}

/// Pre-rendered JSON text, written verbatim
///
/// The text is trusted: nothing checks that it is valid JSON. Blank text
/// renders as `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw(String);

impl Raw {
    /// Wrap pre-rendered JSON.
    pub fn new(json: impl Into<String>) -> Self {
        Raw(json.into())
    }
}

impl Dump for Raw {
    fn dump(&self, out: &mut dyn Write, indent: &str) -> io::Result<()> {
        out.write_all(indent.as_bytes())?;
        let text = self.0.trim();
        if text.is_empty() {
            out.write_all(b"null")
        } else {
            out.write_all(text.as_bytes())
        }
    }
}

impl Dump for PackedField {
    fn dump(&self, out: &mut dyn Write, indent: &str) -> io::Result<()> {
        write!(
            out,
            "{}{{\"field\":{},\"width\":{},\"value\":",
            indent,
            self.id(),
            self.width()
        )?;
        write_string(out, self.digits())?;
        out.write_all(b",\"packed\":")?;
        match self.hex() {
            Ok(hex) => write_string(out, &hex)?,
            Err(e) => write_string(out, &format!("<invalid: {}>", e))?,
        }
        out.write_all(b"}")
    }
}

impl From<SimpleMsg> for PayloadEntry {
    fn from(msg: SimpleMsg) -> Self {
        PayloadEntry::structured(msg)
    }
}

impl From<Raw> for PayloadEntry {
    fn from(raw: Raw) -> Self {
        PayloadEntry::structured(raw)
    }
}
