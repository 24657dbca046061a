//! Error descriptions for tracing
//!
//! An [`ErrorDescription`] captures what a trace needs to know about a
//! failure: a kind label, an optional message, stack frames and the chain
//! of causes. It can be built from any `std::error::Error` by walking
//! `source()`, or recovered from a textual stack trace such as those
//! relayed by remote endpoints:
//!
//! ```text
//! java.io.IOException: unexpected exception
//! 	at BaseChannel.applyIncomingFilters(BaseChannel.java:971)
//! Caused by: java.lang.RuntimeException: Failed to
//! 	at BaseChannel.send(BaseChannel.java:592)
//! 	... 8 more
//! ```

use crate::dump::Dump;
use crate::json::write_string;
use crate::NEST_INDENT;
use std::error::Error as StdError;
use std::io::{self, Write};

/// Kind label used for causes obtained through `Error::source`
const SOURCE_KIND: &str = "source";

/// An error, its stack frames and its cause chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescription {
    kind: String,
    message: Option<String>,
    frames: Vec<String>,
    elided_frames: usize,
    cause: Option<Box<ErrorDescription>>,
}

impl ErrorDescription {
    /// Create a description with only a kind label.
    pub fn new(kind: impl Into<String>) -> Self {
        ErrorDescription {
            kind: kind.into(),
            message: None,
            frames: Vec::new(),
            elided_frames: 0,
            cause: None,
        }
    }

    /// Describe a Rust error, following its `source()` chain.
    ///
    /// The top-level kind is the error's type name; causes are labelled
    /// `source` since their concrete types are erased.
    pub fn from_error<E: StdError + ?Sized>(err: &E) -> Self {
        let mut chain = vec![ErrorDescription::new(short_type_name::<E>())
            .with_message(err.to_string())];

        let mut source = err.source();
        while let Some(s) = source {
            chain.push(ErrorDescription::new(SOURCE_KIND).with_message(s.to_string()));
            source = s.source();
        }

        link_chain(chain).unwrap_or_else(|| ErrorDescription::new(short_type_name::<E>()))
    }

    /// Recover a description from a textual stack trace.
    ///
    /// Returns `None` for blank input. Lines that are neither frames,
    /// `Caused by:` headers nor `... N more` markers are appended to the
    /// message of the error currently being read.
    pub fn parse_trace(text: &str) -> Option<Self> {
        let mut chain: Vec<ErrorDescription> = Vec::new();

        for raw in text.lines() {
            let mut segments = raw.split("\tat ");
            let head = segments.next().unwrap_or("").trim();

            if !head.is_empty() {
                if let Some(rest) = head.strip_prefix("Caused by:") {
                    chain.push(from_headline(rest.trim()));
                } else if chain.is_empty() {
                    chain.push(from_headline(head));
                } else if let Some(frame) = head.strip_prefix("at ") {
                    push_frame(&mut chain, frame);
                } else if let Some(n) = parse_elided(head) {
                    if let Some(last) = chain.last_mut() {
                        last.elided_frames = n;
                    }
                } else if let Some(last) = chain.last_mut() {
                    last.message = Some(match last.message.take() {
                        Some(m) => format!("{}\n{}", m, head),
                        None => head.to_string(),
                    });
                }
            }

            for frame in segments {
                if let Some(n) = parse_elided(frame.trim()) {
                    if let Some(last) = chain.last_mut() {
                        last.elided_frames = n;
                    }
                } else {
                    push_frame(&mut chain, frame);
                }
            }
        }

        link_chain(chain)
    }

    /// Set the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Append a stack frame.
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frames.push(frame.into());
        self
    }

    /// Record frames omitted from the trace (`... N more`).
    pub fn with_elided_frames(mut self, n: usize) -> Self {
        self.elided_frames = n;
        self
    }

    /// Set the cause.
    pub fn with_cause(mut self, cause: ErrorDescription) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Kind label (type name)
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Message, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Stack frames, innermost first
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Frames omitted from the trace
    pub fn elided_frames(&self) -> usize {
        self.elided_frames
    }

    /// Direct cause
    pub fn cause(&self) -> Option<&ErrorDescription> {
        self.cause.as_deref()
    }

    /// Iterate over this error and all of its causes.
    pub fn chain(&self) -> impl Iterator<Item = &ErrorDescription> {
        std::iter::successors(Some(self), |e| e.cause())
    }
}

impl Dump for ErrorDescription {
    fn dump(&self, out: &mut dyn Write, indent: &str) -> io::Result<()> {
        let inner = format!("{}{}", indent, NEST_INDENT);
        let deeper = format!("{}{}", inner, NEST_INDENT);

        write!(out, "{}{{\n{}\"exception\":", indent, inner)?;
        write_string(out, &self.kind)?;

        if let Some(message) = &self.message {
            write!(out, ",\n{}\"message\":", inner)?;
            write_string(out, message)?;
        }

        if !self.frames.is_empty() {
            write!(out, ",\n{}\"stack\":[\n", inner)?;
            for (i, frame) in self.frames.iter().enumerate() {
                if i > 0 {
                    out.write_all(b",\n")?;
                }
                out.write_all(deeper.as_bytes())?;
                write_string(out, frame)?;
            }
            write!(out, "\n{}]", inner)?;
        }

        if self.elided_frames > 0 {
            write!(out, ",\n{}\"more\":{}", inner, self.elided_frames)?;
        }

        if let Some(cause) = &self.cause {
            write!(out, ",\n{}\"cause\":\n", inner)?;
            cause.dump(out, &deeper)?;
        }

        write!(out, "\n{}}}", indent)
    }
}

fn short_type_name<E: ?Sized>() -> String {
    let full = std::any::type_name::<E>();
    let base = full.split('<').next().unwrap_or(full);
    let base = base.trim_start_matches("dyn ");
    // Drop auto-trait bounds: `dyn Error + Send + Sync`
    let base = base.split(" +").next().unwrap_or(base);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

fn from_headline(line: &str) -> ErrorDescription {
    match line.split_once(':') {
        Some((kind, message)) if !kind.contains(' ') => {
            let message = message.trim();
            let desc = ErrorDescription::new(kind.trim());
            if message.is_empty() {
                desc
            } else {
                desc.with_message(message)
            }
        }
        _ => ErrorDescription::new(line),
    }
}

fn push_frame(chain: &mut [ErrorDescription], frame: &str) {
    let frame = frame.trim();
    if frame.is_empty() {
        return;
    }
    if let Some(last) = chain.last_mut() {
        last.frames.push(frame.to_string());
    }
}

fn parse_elided(line: &str) -> Option<usize> {
    line.strip_prefix("...")?
        .trim()
        .strip_suffix("more")?
        .trim()
        .parse()
        .ok()
}

fn link_chain(mut chain: Vec<ErrorDescription>) -> Option<ErrorDescription> {
    let mut linked: Option<ErrorDescription> = None;
    while let Some(mut desc) = chain.pop() {
        desc.cause = linked.map(Box::new);
        linked = Some(desc);
    }
    linked
}
