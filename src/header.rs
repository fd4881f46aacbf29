//! Header field validation (RFC 7230 token grammar, HTTP/2 pseudo-headers).
//!
//! Names are checked against a fixed 256-entry token table. Values are
//! restricted to printable ASCII, plus NUL which is accepted for
//! compatibility with existing peers.

use crate::error::{H2Error, Result};

/// `true` for bytes that may appear in a lowercase header field name.
static VALID_HEADER_NAME_CHARS: [bool; 256] = build_name_table();

const fn build_name_table() -> [bool; 256] {
    let mut table = [false; 256];
    let punct = b"!#$%&'*+-.^_`|~";
    let mut i = 0;
    while i < punct.len() {
        table[punct[i] as usize] = true;
        i += 1;
    }
    let mut c = b'0';
    while c <= b'9' {
        table[c as usize] = true;
        c += 1;
    }
    let mut c = b'a';
    while c <= b'z' {
        table[c as usize] = true;
        c += 1;
    }
    table
}

/// Check whether `name` may be used as a header field name.
///
/// A leading `:` marks a pseudo-header and is skipped, but at least one
/// character must follow it. With `strict_case` set, uppercase ASCII letters
/// are rejected; otherwise they are accepted so the name can be folded to
/// lowercase afterwards.
pub fn validate_header_name(name: &[u8], strict_case: bool) -> bool {
    let rest = match name {
        [] | [b':'] => return false,
        [b':', rest @ ..] => rest,
        _ => name,
    };
    rest.iter().all(|&b| {
        VALID_HEADER_NAME_CHARS[b as usize] || (!strict_case && b.is_ascii_uppercase())
    })
}

/// Check whether `value` may be used as a header field value.
///
/// Only NUL and `0x20..=0x7e` are allowed. An empty value is valid.
pub fn validate_header_value(value: &[u8]) -> bool {
    value.iter().all(|&b| b == 0 || (0x20..=0x7e).contains(&b))
}

/// Validate a name/value pair, reporting the offending name on failure.
pub fn validate_header_field(name: &[u8], value: &[u8], strict_case: bool) -> Result<()> {
    if validate_header_name(name, strict_case) && validate_header_value(value) {
        return Ok(());
    }
    let name = String::from_utf8_lossy(name).into_owned();
    tracing::debug!(%name, value_len = value.len(), strict_case, "rejected header field");
    Err(H2Error::InvalidHeaderField { name })
}

/// Fold ASCII uppercase letters to lowercase in place. Other bytes are untouched.
pub fn to_lowercase_ascii(bytes: &mut [u8]) {
    bytes.make_ascii_lowercase();
}
