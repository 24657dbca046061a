//! Event records
//!
//! A [`LogEvent`] is built by the thread handling a transaction and may be
//! appended to by any other thread taking part in it. Share it as
//! `Arc<LogEvent>`; [`LogEvent::add_message`] only needs `&self`.
//!
//! # Thread Safety
//!
//! The payload is the only mutable state. It is guarded by a mutex held
//! for a single push, or for the clone taken by [`LogEvent::snapshot`].
//! Entries therefore appear in the order their appends acquired the lock,
//! which preserves each thread's own append order.

use crate::payload::PayloadEntry;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// A trace record: realm, optional tag, creation time and payload
#[derive(Debug)]
pub struct LogEvent {
    realm: String,
    tag: Option<String>,
    created_at: DateTime<Utc>,
    payload: Mutex<Vec<PayloadEntry>>,
}

impl LogEvent {
    /// Create an untagged record for `realm`, stamped with the current time.
    pub fn new(realm: impl Into<String>) -> Self {
        LogEvent {
            realm: realm.into(),
            tag: None,
            created_at: Utc::now(),
            payload: Mutex::new(Vec::new()),
        }
    }

    /// Create a record for `realm` whose payload is wrapped under `tag`.
    pub fn tagged(realm: impl Into<String>, tag: impl Into<String>) -> Self {
        LogEvent::new(realm).with_tag(tag)
    }

    /// Set the tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Override the creation time.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Append one entry to the payload.
    pub fn add_message(&self, entry: impl Into<PayloadEntry>) {
        self.payload.lock().push(entry.into());
    }

    /// Append several entries as one contiguous run.
    ///
    /// Entries appended by other threads cannot land in between.
    pub fn add_messages<I, T>(&self, entries: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<PayloadEntry>,
    {
        let entries: Vec<PayloadEntry> = entries.into_iter().map(Into::into).collect();
        self.payload.lock().extend(entries);
    }

    /// Origin label
    pub fn realm(&self) -> &str {
        &self.realm
    }

    /// Tag, if any
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Creation time
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of payload entries
    pub fn len(&self) -> usize {
        self.payload.lock().len()
    }

    /// Check if the payload is empty
    pub fn is_empty(&self) -> bool {
        self.payload.lock().is_empty()
    }

    /// Copy of the payload taken under the lock.
    ///
    /// Rendering works from this copy, so appenders are never blocked by
    /// output I/O.
    pub fn snapshot(&self) -> Vec<PayloadEntry> {
        self.payload.lock().clone()
    }
}
