//! Guaranteed trailer writes
//!
//! A [`TrailerGuard`] owns the output stream for the duration of one
//! record. Whatever happens while the payload is rendered (an `Err`
//! returned through `?`, a panic in a `Dump` impl), dropping the guard
//! writes the trailer, so the next record on the same stream starts
//! from a closed frame.

use crate::format::LogFormat;
use std::io::{self, Write};
use tracing::warn;

/// Writes the trailer for one record when finished or dropped
pub struct TrailerGuard<'a, F: LogFormat + ?Sized> {
    format: &'a F,
    out: &'a mut dyn Write,
    indent: &'a str,
    no_armor: bool,
    done: bool,
}

impl<'a, F: LogFormat + ?Sized> TrailerGuard<'a, F> {
    /// Start a record session on `out`.
    pub fn new(format: &'a F, out: &'a mut dyn Write, indent: &'a str, no_armor: bool) -> Self {
        TrailerGuard {
            format,
            out,
            indent,
            no_armor,
            done: false,
        }
    }

    /// Stream to write the record to
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Write the trailer now and report its outcome.
    pub fn finish(mut self) -> io::Result<()> {
        self.done = true;
        self.format.dump_trailer(&mut *self.out, self.indent, self.no_armor)
    }
}

impl<F: LogFormat + ?Sized> Drop for TrailerGuard<'_, F> {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        if let Err(e) = self.format.dump_trailer(&mut *self.out, self.indent, self.no_armor) {
            warn!(error = %e, "failed to write record trailer");
        }
    }
}
