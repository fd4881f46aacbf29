//! Tests for header value validation

use h2_guard::{validate_header_field, validate_header_value, ErrorCode, H2Error};

#[test]
fn test_printable_ascii_accepted() {
    let all: Vec<u8> = (0x20..=0x7e).collect();
    assert!(validate_header_value(&all));
}

#[test]
fn test_nul_accepted() {
    assert!(validate_header_value(b"ok\x00value"));
    assert!(validate_header_value(b"\x00"));
}

#[test]
fn test_empty_value_accepted() {
    assert!(validate_header_value(b""));
}

#[test]
fn test_controls_del_and_high_bytes_rejected() {
    for b in (0x01..=0x1fu8).chain([0x7f]).chain(0x80..=0xff) {
        let value = [b'a', b, b'z'];
        assert!(!validate_header_value(&value), "byte 0x{:02x}", b);
    }
    assert!(!validate_header_value(b"bad\x7fvalue"));
}

#[test]
fn test_field_error_carries_name_and_code() {
    let err = validate_header_field(b"x-evil", b"a\r\nset-cookie: x", true).unwrap_err();
    assert_eq!(err, H2Error::InvalidHeaderField { name: "x-evil".into() });
    assert_eq!(err.code(), ErrorCode::InvalidHeaderBlock);
}
