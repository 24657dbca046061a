//! Rotation Test Suite
//!
//! Drives `RotatingSink` against real files: records logged before a
//! rotation land whole in `file.1`, archives stay within `copies`, and
//! concurrent producers never interleave.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test rotation
//! ```

#[path = "../common/mod.rs"]
mod common;

mod concurrency;
mod config;
