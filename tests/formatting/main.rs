//! Formatting Test Suite
//!
//! Renders realistic switch traces through the JSON format and checks that
//! every record parses, with the payload where the format puts it.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test formatting
//! cargo test --test formatting errors::
//! ```

#[path = "../common/mod.rs"]
mod common;

mod errors;
mod fields;
mod messages;
