//! Formatter strategy interface

use crate::error::Result;
use crate::json::{JsonFormat, JSON_LABEL};
use chrono::{DateTime, Utc};
use isotrace_core::{LogEvent, PayloadEntry};
use std::io::{self, Write};

/// Borrowed view of everything a formatter needs for one record
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    /// Origin label
    pub realm: &'a str,
    /// Optional tag wrapping the payload
    pub tag: Option<&'a str>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record is being dumped; `None` means now
    pub dumped_at: Option<DateTime<Utc>>,
    /// Entries in append order
    pub payload: &'a [PayloadEntry],
}

impl<'a> Record<'a> {
    /// Create an untagged record view.
    pub fn new(realm: &'a str, created_at: DateTime<Utc>, payload: &'a [PayloadEntry]) -> Self {
        Record {
            realm,
            tag: None,
            created_at,
            dumped_at: None,
            payload,
        }
    }

    /// Set the tag.
    pub fn with_tag(mut self, tag: Option<&'a str>) -> Self {
        self.tag = tag;
        self
    }

    /// Set the dump time.
    pub fn with_dumped_at(mut self, dumped_at: Option<DateTime<Utc>>) -> Self {
        self.dumped_at = dumped_at;
        self
    }
}

/// An output format for trace records
///
/// Implementations are stateless and may be shared between threads.
pub trait LogFormat: Send + Sync {
    /// Configuration label selecting this format
    fn label(&self) -> &'static str;

    /// Write the record header and return the indent for the payload.
    fn dump_header(
        &self,
        out: &mut dyn Write,
        indent: &str,
        realm: &str,
        dumped_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        no_armor: bool,
    ) -> io::Result<String>;

    /// Write the record trailer, closing what the header opened.
    fn dump_trailer(&self, out: &mut dyn Write, indent: &str, no_armor: bool) -> io::Result<()>;

    /// Write a complete record: header, payload, trailer.
    ///
    /// The trailer is written on every exit path.
    fn dump(&self, out: &mut dyn Write, outer: &str, record: &Record<'_>, no_armor: bool)
        -> Result<()>;

    /// Write a complete record for `event`.
    ///
    /// The payload is copied under the event's lock and rendered after the
    /// lock is released, so concurrent appenders never wait on output I/O.
    /// Entries appended after the copy belong to the next dump.
    fn dump_event(
        &self,
        out: &mut dyn Write,
        outer: &str,
        event: &LogEvent,
        dumped_at: Option<DateTime<Utc>>,
        no_armor: bool,
    ) -> Result<()> {
        let payload = event.snapshot();
        let record = Record::new(event.realm(), event.created_at(), &payload)
            .with_tag(event.tag())
            .with_dumped_at(dumped_at);
        self.dump(out, outer, &record, no_armor)
    }
}

/// Resolve a format by its configuration label (case-insensitive).
pub fn format_for_label(label: &str) -> Option<Box<dyn LogFormat>> {
    if label.trim().eq_ignore_ascii_case(JSON_LABEL) {
        Some(Box::new(JsonFormat::new()))
    } else {
        None
    }
}
