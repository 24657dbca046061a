//! JSON string escaping
//!
//! Trace payloads carry arbitrary text: stack traces with tabs, XML
//! fragments with quotes, embedded JSON documents. Every string that
//! reaches the output goes through [`write_string`].

use std::io::{self, Write};

/// Write `s` to `out` as an escaped JSON string.
///
/// Unescaped runs go out as borrowed slices; only the escapes themselves
/// are written separately.
pub fn write_string(out: &mut dyn Write, s: &str) -> io::Result<()> {
    out.write_all(b"\"")?;
    let mut run_start = 0;
    for (i, c) in s.char_indices() {
        let escape: Option<&[u8]> = match c {
            '"' => Some(b"\\\""),
            '\\' => Some(b"\\\\"),
            '\n' => Some(b"\\n"),
            '\r' => Some(b"\\r"),
            '\t' => Some(b"\\t"),
            c if c.is_control() => None,
            _ => continue,
        };
        out.write_all(&s.as_bytes()[run_start..i])?;
        match escape {
            Some(escape) => out.write_all(escape)?,
            None => write!(out, "\\u{:04x}", c as u32)?,
        }
        run_start = i + c.len_utf8();
    }
    out.write_all(&s.as_bytes()[run_start..])?;
    out.write_all(b"\"")
}

/// Encode a string as a quoted, escaped JSON string.
pub fn encode_string(s: &str) -> String {
    let mut buf = Vec::with_capacity(s.len() + 2);
    // Writing into a Vec cannot fail
    let _ = write_string(&mut buf, s);
    String::from_utf8_lossy(&buf).into_owned()
}
