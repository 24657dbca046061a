//! Core types for isotrace
//!
//! This crate defines what a trace record is made of:
//! - [`Dump`]: the capability of a value to render itself as JSON
//! - [`PayloadEntry`]: one heterogeneous element of a record's payload
//! - [`LogEvent`]: the event record, safe to append to from many threads
//! - [`ErrorDescription`]: an error with its cause chain and stack frames
//! - [`SimpleMsg`] and [`Raw`]: small structured values for ad-hoc tracing
//!
//! Formatting a whole record (header, payload, trailer) lives in
//! `isotrace-format`; this crate only knows how individual values render.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dump;
pub mod error_desc;
pub mod event;
pub mod json;
pub mod payload;
pub mod structured;

pub use dump::Dump;
pub use error_desc::ErrorDescription;
pub use event::LogEvent;
pub use json::{encode_string, write_string};
pub use payload::PayloadEntry;
pub use structured::{Raw, SimpleMsg};

/// Indentation added for each nesting level inside a value
pub const NEST_INDENT: &str = "  ";
