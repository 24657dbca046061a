//! Packed numeric fields

use crate::common::*;
use isotrace::prelude::*;
use isotrace::{pack, unpack, CodecError, Error};

#[test]
fn test_pack_known_vector() {
    assert_eq!(pack("1234", 10).unwrap(), vec![0x00, 0x00, 0x00, 0x12, 0x34]);
}

#[test]
fn test_unpack_known_vector() {
    let bytes = [0x00, 0x00, 0x00, 0x12, 0x34];
    assert_eq!(unpack(&bytes, 0, 10).unwrap(), "0000001234");
}

#[test]
fn test_reversibility() {
    let field = NumericField::new(10, "Should be 1234");
    let packed = field.pack("1234").unwrap();
    let (value, consumed) = field.unpack(&packed, 0).unwrap();
    assert_eq!(value, "0000001234");
    assert_eq!(consumed, 5);
}

#[test]
fn test_codec_errors_convert() {
    let err: Error = pack("12x4", 6).unwrap_err().into();
    assert!(err.is_codec());

    let err = unpack(&[0x12], 0, 4).unwrap_err();
    assert!(matches!(err, CodecError::Truncated { .. }));
}

#[test]
fn test_packed_fields_in_trace() {
    let listener = memory_listener();
    let event = LogEvent::tagged("channel", "send");
    event.add_message(PackedField::new(3, "990000", 6));
    event.add_message(PackedField::new(11, "123", 6));
    event.add_message(PackedField::new(4, "12ab", 6));
    listener.log(&event);

    let records = parse_stream(&listener.contents());
    let send = &records[0]["send"];
    assert_eq!(
        send[0],
        serde_json::json!({"field": 3, "width": 6, "value": "990000", "packed": "990000"})
    );
    assert_eq!(send[1]["packed"], "000123");
    assert!(send[2]["packed"].as_str().unwrap().starts_with("<invalid"));
}
