//! JSON record format
//!
//! An armored record is one JSON object:
//!
//! ```text
//! {
//!  "log":{"realm":"channel","at":"2026-10-18T14:03:07.412","lifespan":"12ms"},
//!  "connect":[
//!    "Try 0 127.0.0.1:1990 ",
//!    "Connection refused"
//!  ]
//! }
//! ```
//!
//! - `lifespan` is present only when the record is dumped strictly after it
//!   was created
//! - an empty payload under a tag renders as `"connect":{}`; an empty
//!   untagged payload renders nothing
//! - untagged payloads are listed under `"payload"`
//!
//! Without armor the header and trailer shrink to a blank line and the
//! payload is a sequence of standalone JSON values: one per entry, or a
//! single `{"<tag>":[...]}` object when tagged.

use crate::error::{RenderError, Result};
use crate::format::{LogFormat, Record};
use crate::guard::TrailerGuard;
use chrono::{DateTime, Local, Utc};
use isotrace_core::{write_string, Dump, PayloadEntry, NEST_INDENT};
use std::io::{self, Write};

/// Configuration label of the JSON format
pub const JSON_LABEL: &str = "JSON";

/// Key listing the entries of an untagged armored record
const UNTAGGED_KEY: &str = "payload";

/// Indent added by the armor around the payload
const ARMOR_INDENT: &str = " ";

/// Format an instant as local time, `yyyy-MM-ddTHH:mm:ss.SSS`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%Y-%m-%dT%H:%M:%S%.3f")
        .to_string()
}

/// Streams records as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl JsonFormat {
    /// Create the format.
    pub fn new() -> Self {
        JsonFormat
    }

    fn dump_payload(
        &self,
        out: &mut dyn Write,
        indent: &str,
        record: &Record<'_>,
        no_armor: bool,
    ) -> Result<()> {
        if record.payload.is_empty() {
            if let Some(tag) = record.tag {
                if no_armor {
                    write!(out, "{}{{", indent)?;
                    write_string(out, tag)?;
                    out.write_all(b":{}}\n")?;
                } else {
                    write!(out, ",\n{}", indent)?;
                    write_string(out, tag)?;
                    out.write_all(b":{}")?;
                }
            }
            return Ok(());
        }

        let nested = format!("{}{}", indent, NEST_INDENT);
        match (record.tag, no_armor) {
            (Some(tag), false) if !tag.is_empty() => {
                dump_block(out, indent, tag, &nested, record.payload)
            }
            (Some(_), false) => dump_block(out, indent, UNTAGGED_KEY, &nested, record.payload),
            (None, false) => dump_block(out, indent, UNTAGGED_KEY, "", record.payload),
            (Some(tag), true) if !tag.is_empty() => {
                write!(out, "{}{{", indent)?;
                write_string(out, tag)?;
                out.write_all(b":[\n")?;
                dump_entries(out, &nested, record.payload, b",\n")?;
                write!(out, "\n{}]}}\n", indent)?;
                Ok(())
            }
            (Some(_), true) => dump_loose(out, &nested, record.payload),
            (None, true) => dump_loose(out, "", record.payload),
        }
    }
}

impl LogFormat for JsonFormat {
    fn label(&self) -> &'static str {
        JSON_LABEL
    }

    fn dump_header(
        &self,
        out: &mut dyn Write,
        indent: &str,
        realm: &str,
        dumped_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        no_armor: bool,
    ) -> io::Result<String> {
        if no_armor {
            out.write_all(b"\n")?;
            return Ok(indent.to_string());
        }

        let dumped_at = dumped_at.unwrap_or_else(Utc::now);
        write!(out, "{}{{\n{}{}\"log\":{{\"realm\":", indent, indent, ARMOR_INDENT)?;
        write_string(out, realm)?;
        write!(out, ",\"at\":\"{}\"", format_timestamp(dumped_at))?;

        let elapsed = (dumped_at - created_at).num_milliseconds();
        if elapsed > 0 {
            write!(out, ",\"lifespan\":\"{}ms\"", elapsed)?;
        }
        out.write_all(b"}")?;

        Ok(format!("{}{}", indent, ARMOR_INDENT))
    }

    fn dump_trailer(&self, out: &mut dyn Write, indent: &str, no_armor: bool) -> io::Result<()> {
        if no_armor {
            return Ok(());
        }
        write!(out, "\n{}}}\n", indent)
    }

    fn dump(
        &self,
        out: &mut dyn Write,
        outer: &str,
        record: &Record<'_>,
        no_armor: bool,
    ) -> Result<()> {
        let mut session = TrailerGuard::new(self, out, outer, no_armor);
        let indent = self.dump_header(
            session.out(),
            outer,
            record.realm,
            record.dumped_at,
            record.created_at,
            no_armor,
        )?;
        self.dump_payload(session.out(), &indent, record, no_armor)?;
        session.finish()?;
        Ok(())
    }
}

/// `,\n<indent>"<key>":[\n <entries> \n<indent>]`
fn dump_block(
    out: &mut dyn Write,
    indent: &str,
    key: &str,
    working: &str,
    payload: &[PayloadEntry],
) -> Result<()> {
    write!(out, ",\n{}", indent)?;
    write_string(out, key)?;
    out.write_all(b":[\n")?;
    dump_entries(out, working, payload, b",\n")?;
    write!(out, "\n{}]", indent)?;
    Ok(())
}

/// One standalone value per line
fn dump_loose(out: &mut dyn Write, working: &str, payload: &[PayloadEntry]) -> Result<()> {
    dump_entries(out, working, payload, b"\n")?;
    out.write_all(b"\n")?;
    Ok(())
}

fn dump_entries(
    out: &mut dyn Write,
    working: &str,
    payload: &[PayloadEntry],
    separator: &[u8],
) -> Result<()> {
    for (index, entry) in payload.iter().enumerate() {
        if index > 0 {
            out.write_all(separator)?;
        }
        entry
            .dump(out, working)
            .map_err(|source| RenderError::Entry {
                index,
                kind: entry.kind(),
                source,
            })?;
    }
    Ok(())
}
