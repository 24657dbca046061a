//! Record formatters for isotrace
//!
//! A formatter turns one [`LogEvent`](isotrace_core::LogEvent) into text
//! on an output stream, in three phases:
//!
//! ```text
//! dump():
//!   ┌─────────────────┐
//!   │  dump_header()  │  armor: {"log":{realm, at, lifespan}
//!   └────────┬────────┘
//!            │
//!   ┌────────▼────────┐
//!   │  payload        │  entries in append order, Dump impls called back
//!   └────────┬────────┘
//!            │  (any exit path, including errors and panics)
//!   ┌────────▼────────┐
//!   │  dump_trailer() │  closes the armor
//!   └─────────────────┘
//! ```
//!
//! Nothing is buffered: every phase writes straight to the stream.
//! [`JsonFormat`] is the only strategy; [`format_for_label`] resolves the
//! `format` configuration value.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod format;
pub mod guard;
pub mod json;

pub use error::{RenderError, Result};
pub use format::{format_for_label, LogFormat, Record};
pub use guard::TrailerGuard;
pub use json::{format_timestamp, JsonFormat, JSON_LABEL};
