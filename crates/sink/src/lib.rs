//! Output sinks for isotrace
//!
//! This crate delivers formatted records to their destination:
//! - [`LogListener`]: the fire-and-forget `log(event)` contract
//! - [`RotatingSink`]: flat log file with numbered archives
//! - [`MemoryListener`]: in-memory buffer, mostly for tests
//! - [`RotateConfig`]: `file`, `copies`, `maxsize`, `format`
//!
//! ## Ordering
//!
//! Every sink serializes `log` calls behind one lock, and rotation takes
//! the same lock. Records never interleave on a stream and never straddle
//! a rotation boundary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod listener;
pub mod rotate;

pub use config::{RotateConfig, DEFAULT_COPIES, DEFAULT_MAXSIZE};
pub use error::{ConfigError, Result, SinkError};
pub use listener::{LogListener, MemoryListener};
pub use rotate::{archive_path, RotatingSink, SinkStats, DEBUG_REALM};
