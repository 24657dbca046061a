//! # isotrace
//!
//! Structured JSON tracing for message-switching platforms.
//!
//! A trace record is a [`LogEvent`]: a realm, an optional tag and a payload
//! of heterogeneous entries that any number of threads may append to while
//! the event is in flight. Listeners render finished events as JSON through
//! a [`LogFormat`] and write them out; [`RotatingSink`] keeps them in a
//! size-limited file with numbered archives.
//!
//! ## Quick Start
//!
//! ```ignore
//! use isotrace::prelude::*;
//!
//! let sink = RotatingSink::open(RotateConfig::new("log/q2.log").copies(5))?;
//!
//! let event = LogEvent::tagged("channel/bank-a", "send");
//! event.add_message("0800");
//! event.add_message(PackedField::new(3, "990000", 6));
//! sink.log(&event);
//! ```
//!
//! ## Crates
//!
//! - [`codec`] - BCD numeric field packing
//! - [`trace`] - `Dump`, payload entries, the event record
//! - [`format`] - record framing and the JSON format
//! - [`sink`] - listeners and the rotating file sink

#![warn(missing_docs)]

mod error;

pub mod prelude;

pub use isotrace_codec as codec;
pub use isotrace_core as trace;
pub use isotrace_format as format;
pub use isotrace_sink as sink;

pub use error::{Error, Result};

pub use isotrace_codec::{pack, unpack, CodecError, NumericField, PackedField};
pub use isotrace_core::{Dump, ErrorDescription, LogEvent, PayloadEntry, Raw, SimpleMsg};
pub use isotrace_format::{JsonFormat, LogFormat, Record, RenderError};
pub use isotrace_sink::{
    ConfigError, LogListener, MemoryListener, RotateConfig, RotatingSink, SinkError,
};
