//! Rotating file sink
//!
//! One active file plus up to `copies` numbered archives:
//!
//! ```text
//! q2.log      <- active
//! q2.log.1    <- most recent archive
//! q2.log.2
//! ...
//! ```
//!
//! Rotation shifts every archive up by one, drops the one that falls off
//! the end, moves the active file to `.1` and opens a fresh active file.
//! It runs under the same lock as `log`, so each file holds complete
//! records only.

use crate::config::RotateConfig;
use crate::error::{Result, SinkError};
use crate::listener::LogListener;
use isotrace_core::LogEvent;
use isotrace_format::{format_for_label, LogFormat};
use parking_lot::Mutex;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error, info, warn};

/// Realm of the sink's own diagnostic events
pub const DEBUG_REALM: &str = "rotate-log-listener";

/// Path of archive number `n` for `base`.
pub fn archive_path(base: &Path, n: usize) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(format!(".{}", n));
    PathBuf::from(name)
}

/// Counters for one sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkStats {
    /// Records written, including partial ones
    pub records: u64,
    /// Records that failed to render completely
    pub failures: u64,
    /// Completed rotations
    pub rotations: u64,
}

/// Byte-counting writer
struct Metered<W> {
    inner: W,
    written: u64,
}

impl<W: Write> Write for Metered<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

type Active = Metered<BufWriter<File>>;

/// The sink's output file
enum State {
    Open(Active),
    // Reopening the base path failed; retried on the next write or rotation
    Broken,
    Closed,
}

/// Appends formatted records to a size-limited, rotated log file
pub struct RotatingSink {
    config: RotateConfig,
    format: Box<dyn LogFormat>,
    state: Mutex<State>,
    records: AtomicU64,
    failures: AtomicU64,
    rotations: AtomicU64,
}

impl RotatingSink {
    /// Open the sink described by `config`, appending to an existing file.
    pub fn open(config: RotateConfig) -> Result<Self> {
        config.validate()?;
        let format = format_for_label(&config.format)
            .ok_or_else(|| crate::ConfigError::UnknownFormat(config.format.clone()))?;
        Self::with_format(config, format)
    }

    /// Open with an explicit formatter; `config.format` is not consulted.
    pub fn with_format(config: RotateConfig, format: Box<dyn LogFormat>) -> Result<Self> {
        let active = open_active(&config.file)?;
        debug!(
            file = %config.file.display(),
            size = active.written,
            copies = config.copies,
            maxsize = config.maxsize,
            "opened log file"
        );

        Ok(RotatingSink {
            config,
            format,
            state: Mutex::new(State::Open(active)),
            records: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            rotations: AtomicU64::new(0),
        })
    }

    /// Path of the active file
    pub fn path(&self) -> &Path {
        &self.config.file
    }

    /// Configuration in effect
    pub fn config(&self) -> &RotateConfig {
        &self.config
    }

    /// Current counters
    pub fn stats(&self) -> SinkStats {
        SinkStats {
            records: self.records.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            rotations: self.rotations.load(Ordering::Relaxed),
        }
    }

    /// Write one record and report the outcome.
    ///
    /// A record whose rendering fails or panics midway is still closed
    /// with its trailer, counted, and followed by the size check.
    pub fn try_log(&self, event: &LogEvent) -> Result<()> {
        let mut state = self.state.lock();
        let out = self.reopen_if_broken(&mut state)?;

        let rendered = match panic::catch_unwind(AssertUnwindSafe(|| {
            self.format.dump_event(&mut *out, "", event, None, false)
        })) {
            Ok(result) => result.map_err(SinkError::from),
            Err(_) => Err(SinkError::RenderPanic),
        };
        let flushed = out.flush();
        let written = out.written;

        self.records.fetch_add(1, Ordering::Relaxed);
        if rendered.is_err() {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }

        if written >= self.config.maxsize {
            self.rotate_locked(&mut state)?;
        }

        rendered?;
        flushed?;
        Ok(())
    }

    /// Rotate now, regardless of size.
    ///
    /// Also recovers a sink whose base path could not be reopened.
    pub fn log_rotate(&self) -> Result<()> {
        let mut state = self.state.lock();
        if let State::Closed = *state {
            return Err(SinkError::Closed);
        }
        self.rotate_locked(&mut state)
    }

    /// Log a diagnostic message under [`DEBUG_REALM`].
    pub fn log_debug(&self, message: &str) {
        let event = LogEvent::tagged(DEBUG_REALM, "debug");
        event.add_message(message);
        self.log(&event);
    }

    /// Flush buffered output.
    pub fn flush(&self) -> Result<()> {
        let mut state = self.state.lock();
        Ok(self.reopen_if_broken(&mut state)?.flush()?)
    }

    /// Flush and close the active file. Later writes fail with `Closed`.
    pub fn close(&self) -> Result<()> {
        match std::mem::replace(&mut *self.state.lock(), State::Closed) {
            State::Open(mut out) => {
                out.flush()?;
                debug!(file = %self.config.file.display(), "closed log file");
                Ok(())
            }
            State::Broken | State::Closed => Ok(()),
        }
    }

    /// The open file, reopening the base path first if an earlier
    /// rotation left the sink without one.
    fn reopen_if_broken<'s>(&self, state: &'s mut State) -> Result<&'s mut Active> {
        if let State::Broken = state {
            let fresh = open_active(&self.config.file)?;
            info!(file = %self.config.file.display(), "reopened log file");
            *state = State::Open(fresh);
        }
        match state {
            State::Open(out) => Ok(out),
            State::Broken | State::Closed => Err(SinkError::Closed),
        }
    }

    fn rotate_locked(&self, state: &mut State) -> Result<()> {
        // A failed flush keeps the current file in place.
        if let State::Open(out) = state {
            out.flush()?;
        }
        *state = State::Broken;

        let base = &self.config.file;
        let shifted = shift_archives(base, self.config.copies);
        let reopened = open_active(base);

        match (shifted, reopened) {
            (Ok(()), Ok(fresh)) => {
                *state = State::Open(fresh);
                self.rotations.fetch_add(1, Ordering::Relaxed);
                info!(file = %base.display(), copies = self.config.copies, "rotated log file");
                Ok(())
            }
            (Err(e), Ok(fresh)) => {
                // Keep logging into whatever file is at the base path.
                *state = State::Open(fresh);
                error!(file = %base.display(), error = %e, "log rotation failed");
                Err(e.into())
            }
            (_, Err(e)) => {
                error!(file = %base.display(), error = %e, "cannot reopen log file; will retry");
                Err(e.into())
            }
        }
    }
}

impl LogListener for RotatingSink {
    fn log(&self, event: &LogEvent) {
        if let Err(e) = self.try_log(event) {
            warn!(realm = event.realm(), error = %e, "trace record not fully written");
        }
    }
}

impl Drop for RotatingSink {
    fn drop(&mut self) {
        if let State::Open(out) = self.state.get_mut() {
            if let Err(e) = out.flush() {
                warn!(error = %e, "failed to flush log file on drop");
            }
        }
    }
}

fn open_active(path: &Path) -> io::Result<Active> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let written = file.metadata()?.len();
    Ok(Metered {
        inner: BufWriter::new(file),
        written,
    })
}

/// `base.(n-1)` -> `base.n` down to `base` -> `base.1`.
fn shift_archives(base: &Path, copies: usize) -> io::Result<()> {
    if copies == 0 {
        return remove_if_exists(base);
    }

    remove_if_exists(&archive_path(base, copies))?;
    for n in (1..copies).rev() {
        rename_if_exists(&archive_path(base, n), &archive_path(base, n + 1))?;
    }
    rename_if_exists(base, &archive_path(base, 1))
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

fn rename_if_exists(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}
