//! Convenient imports for isotrace.
//!
//! ```ignore
//! use isotrace::prelude::*;
//!
//! let listener = MemoryListener::new();
//! let event = LogEvent::new("test");
//! event.add_message("hello");
//! listener.log(&event);
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Records
pub use isotrace_core::{Dump, ErrorDescription, LogEvent, PayloadEntry, Raw, SimpleMsg};

// Fields
pub use isotrace_codec::{NumericField, PackedField};

// Formatting
pub use isotrace_format::{JsonFormat, LogFormat};

// Output
pub use isotrace_sink::{LogListener, MemoryListener, RotateConfig, RotatingSink};
