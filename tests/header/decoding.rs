//! Tests for the validating HPACK decoder

use h2_guard::{H2Error, H2Header, HeaderPolicy, HpackDecoder};

fn literal(name: &[u8], value: &[u8]) -> Vec<u8> {
    let mut out = vec![0x00, name.len() as u8];
    out.extend_from_slice(name);
    out.push(value.len() as u8);
    out.extend_from_slice(value);
    out
}

#[test]
fn test_decode_literal_indexed_name() {
    let mut decoder = HpackDecoder::new();

    // 0x41 = literal with indexing, indexed name (index 1 = :authority)
    let data = [
        0x41, 0x0B, b'e', b'x', b'a', b'm', b'p', b'l', b'e', b'.', b'c', b'o', b'm',
    ];

    let headers = decoder.decode(&data).unwrap();
    assert_eq!(headers, vec![H2Header::new(":authority", "example.com")]);
}

#[test]
fn test_dynamic_table_persists_across_blocks() {
    let mut decoder = HpackDecoder::new();

    let data = [
        0x40, 0x06, b'c', b'u', b's', b't', b'o', b'm', 0x05, b'v', b'a', b'l', b'u', b'e',
    ];
    decoder.decode(&data).unwrap();

    // 0xbe = first dynamic table entry (index 62)
    let headers = decoder.decode(&[0xbe]).unwrap();
    assert_eq!(headers, vec![H2Header::new("custom", "value")]);
}

#[test]
fn test_invalid_name_rejects_whole_block() {
    let mut decoder = HpackDecoder::new();
    let mut block = vec![0x82, 0x84];
    block.extend(literal(b"bad name", b"v"));

    let err = decoder.decode(&block).unwrap_err();
    assert_eq!(err, H2Error::InvalidHeaderField { name: "bad name".into() });
}

#[test]
fn test_empty_pseudo_header_name_rejected() {
    let mut decoder = HpackDecoder::new();
    let err = decoder.decode(&literal(b":", b"v")).unwrap_err();
    assert_eq!(err, H2Error::InvalidHeaderField { name: ":".into() });
}

#[test]
fn test_lenient_policy_lowercases_names() {
    let mut decoder = HpackDecoder::with_policy(HeaderPolicy { strict_case: false });
    assert!(!decoder.policy().strict_case);

    let headers = decoder.decode(&literal(b"Content-Type", b"text/plain")).unwrap();
    assert_eq!(headers, vec![H2Header::new("content-type", "text/plain")]);
}

#[test]
fn test_high_byte_value_rejected() {
    let mut decoder = HpackDecoder::new();
    let err = decoder.decode(&literal(b"x-name", "caf\u{e9}".as_bytes())).unwrap_err();
    assert!(matches!(err, H2Error::InvalidHeaderField { .. }));
}
