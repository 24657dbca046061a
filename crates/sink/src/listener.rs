//! Listener contract and the in-memory listener

use isotrace_core::LogEvent;
use isotrace_format::{JsonFormat, LogFormat};
use parking_lot::Mutex;
use std::panic::{self, AssertUnwindSafe};
use tracing::warn;

/// Receives finished events
///
/// `log` is fire-and-forget: a listener that cannot deliver a record
/// reports it through its own channels and never fails the caller.
pub trait LogListener: Send + Sync {
    /// Deliver one event.
    fn log(&self, event: &LogEvent);
}

impl<T: LogListener + ?Sized> LogListener for std::sync::Arc<T> {
    fn log(&self, event: &LogEvent) {
        (**self).log(event)
    }
}

/// Renders events into an in-memory buffer
pub struct MemoryListener {
    format: Box<dyn LogFormat>,
    no_armor: bool,
    buffer: Mutex<Vec<u8>>,
}

impl MemoryListener {
    /// Armored JSON listener.
    pub fn new() -> Self {
        Self::with_format(Box::new(JsonFormat::new()))
    }

    /// Listener using `format`.
    pub fn with_format(format: Box<dyn LogFormat>) -> Self {
        MemoryListener {
            format,
            no_armor: false,
            buffer: Mutex::new(Vec::new()),
        }
    }

    /// Write records without the header/trailer frame.
    pub fn no_armor(mut self) -> Self {
        self.no_armor = true;
        self
    }

    /// Everything rendered so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Drain the buffer.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.buffer.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Default for MemoryListener {
    fn default() -> Self {
        Self::new()
    }
}

impl LogListener for MemoryListener {
    fn log(&self, event: &LogEvent) {
        let mut buffer = self.buffer.lock();
        let out: &mut Vec<u8> = &mut buffer;
        let rendered = panic::catch_unwind(AssertUnwindSafe(|| {
            self.format.dump_event(out, "", event, None, self.no_armor)
        }));
        match rendered {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(realm = event.realm(), error = %e, "record rendered partially"),
            Err(_) => warn!(realm = event.realm(), "record rendering panicked"),
        }
    }
}
