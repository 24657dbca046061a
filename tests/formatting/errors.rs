//! Error payloads

use crate::common::*;
use isotrace::prelude::*;
use std::fmt;
use std::io;

#[derive(Debug)]
struct SqlError {
    state: &'static str,
    source: io::Error,
}

impl fmt::Display for SqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "query failed (SQLSTATE {})", self.state)
    }
}

impl std::error::Error for SqlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[test]
fn test_io_error_payload() {
    let listener = memory_listener();
    let event = LogEvent::tagged("channel", "warn");
    let err = io::Error::new(io::ErrorKind::UnexpectedEof, "peer closed");
    event.add_message(ErrorDescription::from_error(&err));
    event.add_message("channel-receiver-Channel_101-receive");
    listener.log(&event);

    let records = parse_stream(&listener.contents());
    let warn = &records[0]["warn"];
    assert_eq!(warn[0]["exception"], "Error");
    assert_eq!(warn[0]["message"], "peer closed");
    assert_eq!(warn[1], "channel-receiver-Channel_101-receive");
}

#[test]
fn test_error_with_source_chain() {
    let listener = memory_listener();
    let event = LogEvent::tagged("db", "receive");
    let err = SqlError {
        state: "08001",
        source: io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
    };
    event.add_message(ErrorDescription::from_error(&err));
    listener.log(&event);

    let records = parse_stream(&listener.contents());
    let desc = &records[0]["receive"][0];
    assert_eq!(desc["exception"], "SqlError");
    assert_eq!(desc["message"], "query failed (SQLSTATE 08001)");
    assert_eq!(desc["cause"]["message"], "connection refused");
}

#[test]
fn test_parsed_stack_trace() {
    let listener = memory_listener();
    let event = LogEvent::tagged("channel", "error");
    let trace = WRAPPED_TRACE
        .trim_start_matches("<ERROR>")
        .trim_end_matches("</ERROR>");
    let desc = ErrorDescription::parse_trace(trace).unwrap();
    event.add_message(desc);
    listener.log(&event);

    let records = parse_stream(&listener.contents());
    let desc = &records[0]["error"][0];
    assert_eq!(desc["exception"], "java.io.IOException");
    assert_eq!(desc["message"], "unexpected exception");
    assert_eq!(
        desc["stack"][0],
        "org.example.iso.BaseChannel.applyIncomingFilters(BaseChannel.java:971)"
    );
    assert_eq!(desc["cause"]["exception"], "java.lang.RuntimeException");
    assert_eq!(desc["cause"]["more"], 8);
}

#[test]
fn test_wrapped_trace_as_text() {
    let listener = memory_listener();
    let event = LogEvent::new("channel");
    event.add_message(SimpleMsg::new("isomsg", None, XML_SOURCE));
    event.add_message(WRAPPED_TRACE);
    listener.log(&event);

    let records = parse_stream(&listener.contents());
    assert_eq!(records[0]["payload"][1], WRAPPED_TRACE);
}

#[test]
fn test_error_without_message() {
    let listener = memory_listener();
    let event = LogEvent::tagged("channel", "receive");
    event.add_message(ErrorDescription::new("IndexOutOfBounds"));
    listener.log(&event);

    let records = parse_stream(&listener.contents());
    let desc = records[0]["receive"][0].as_object().unwrap();
    assert_eq!(desc["exception"], "IndexOutOfBounds");
    assert!(!desc.contains_key("message"));
}
