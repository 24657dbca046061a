//! Opening sinks from configuration

use crate::common::*;
use isotrace::prelude::*;
use isotrace::{ConfigError, Error};
use std::collections::HashMap;
use tempfile::TempDir;

#[test]
fn test_open_from_properties() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let mut props = HashMap::new();
    props.insert(
        "file".to_string(),
        dir.path().join("q2.log").to_string_lossy().into_owned(),
    );
    props.insert("copies".to_string(), "2".to_string());
    props.insert("maxsize".to_string(), "1000000".to_string());
    props.insert("format".to_string(), "JSON".to_string());

    let config = RotateConfig::from_properties(&props).unwrap();
    let sink = RotatingSink::open(config).unwrap();
    assert_eq!(sink.config().copies, 2);

    let event = LogEvent::tagged("test", "info");
    event.add_message("configured");
    sink.log(&event);
    assert_eq!(read_records(sink.path())[0]["info"][0], "configured");
}

#[test]
fn test_open_from_json() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let doc = serde_json::json!({
        "file": dir.path().join("q2.log"),
        "copies": 4,
        "maxsize": 2048,
    });

    let config = RotateConfig::from_json(&doc.to_string()).unwrap();
    let sink = RotatingSink::open(config).unwrap();
    assert_eq!(sink.config().maxsize, 2048);
    assert_eq!(sink.config().format, "JSON");
}

#[test]
fn test_unknown_format_is_rejected() {
    let mut props = HashMap::new();
    props.insert("file".to_string(), "q2.log".to_string());
    props.insert("format".to_string(), "XML".to_string());

    let err: Error = RotateConfig::from_properties(&props).unwrap_err().into();
    assert!(err.is_config());
    assert!(matches!(err, Error::Config(ConfigError::UnknownFormat(_))));
}

#[test]
fn test_closed_sink_reports_through_facade_error() {
    let (_dir, sink) = rotating_sink("q2.log", 1, 10_000_000);
    sink.close().unwrap();

    let err: Error = sink.try_log(&LogEvent::new("late")).unwrap_err().into();
    assert!(matches!(err, Error::Closed));
}
