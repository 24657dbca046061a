//! Plain text payloads

use crate::common::*;
use isotrace::prelude::*;

#[test]
fn test_connect_messages() {
    let listener = memory_listener();
    let event = LogEvent::tagged("channel/bank-a", "connect");
    event.add_message("Try 0 127.0.0.1:1990 ");
    event.add_message(" Connection refused (Connection refused)");
    event.add_message("Unable to connect");
    listener.log(&event);

    let records = parse_stream(&listener.contents());
    assert_eq!(records.len(), 1);
    let connect = records[0]["connect"].as_array().unwrap();
    assert_eq!(connect.len(), 3);
    assert_eq!(connect[0], "Try 0 127.0.0.1:1990 ");
    assert_eq!(connect[2], "Unable to connect");
    assert_eq!(records[0]["log"]["realm"], "channel/bank-a");
}

#[test]
fn test_single_info_message() {
    let listener = memory_listener();
    let event = LogEvent::tagged("mux", "info");
    event.add_message("Mux :Mux_200Echo Interval :10000");
    listener.log(&event);

    let records = parse_stream(&listener.contents());
    assert_eq!(records[0]["info"][0], "Mux :Mux_200Echo Interval :10000");
}

#[test]
fn test_untagged_event_uses_payload_key() {
    let listener = memory_listener();
    let event = LogEvent::new("server");
    event.add_message("listening");
    listener.log(&event);

    let records = parse_stream(&listener.contents());
    assert_eq!(records[0]["payload"][0], "listening");
}

#[test]
fn test_empty_tagged_event() {
    let listener = memory_listener();
    listener.log(&LogEvent::tagged("server", "session-end"));

    let records = parse_stream(&listener.contents());
    assert!(records[0]["session-end"].as_object().unwrap().is_empty());
}

#[test]
fn test_unpack_dump_text_stays_valid() {
    let listener = memory_listener();
    let event = LogEvent::tagged("channel", "receive");
    event.add_message(UNPACK_DUMP);
    listener.log(&event);

    let records = parse_stream(&listener.contents());
    assert_eq!(records[0]["receive"][0], UNPACK_DUMP);
}

#[test]
fn test_control_characters_are_escaped() {
    let listener = memory_listener();
    let event = LogEvent::tagged("channel", "raw");
    event.add_message("\u{1}\u{2}ISO\u{3}\"quoted\"\\");
    listener.log(&event);

    let records = parse_stream(&listener.contents());
    assert_eq!(records[0]["raw"][0], "\u{1}\u{2}ISO\u{3}\"quoted\"\\");
}

#[test]
fn test_object_array() {
    let listener = memory_listener();
    let event = LogEvent::tagged("test", "array");
    event.add_message(PayloadEntry::array(vec!["1", "2", "3"]));
    listener.log(&event);

    let records = parse_stream(&listener.contents());
    assert_eq!(records[0]["array"][0], serde_json::json!(["1", "2", "3"]));
}

#[test]
fn test_nested_arrays_and_nulls() {
    let listener = memory_listener();
    let event = LogEvent::tagged("test", "nested");
    event.add_message(PayloadEntry::array(vec![
        PayloadEntry::array(vec!["a"]),
        PayloadEntry::Null,
        PayloadEntry::array(Vec::<PayloadEntry>::new()),
    ]));
    event.add_message(None::<String>);
    listener.log(&event);

    let records = parse_stream(&listener.contents());
    assert_eq!(
        records[0]["nested"],
        serde_json::json!([[["a"], null, []], null])
    );
}

#[test]
fn test_many_records_are_separate_values() {
    let listener = memory_listener();
    for n in 0..10 {
        let event = LogEvent::tagged("batch", "info");
        event.add_message(format!("record {}", n));
        listener.log(&event);
    }

    let records = parse_stream(&listener.contents());
    assert_eq!(records.len(), 10);
    assert_eq!(records[9]["info"][0], "record 9");
}
