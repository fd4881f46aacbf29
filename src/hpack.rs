//! Validating header-block decoder.
//!
//! Decompression is delegated to `fluke-hpack`; every decoded field is then
//! run through the header validator before it is handed to application
//! code. A single invalid field rejects the whole block.

use crate::error::{H2Error, Result};
use crate::header::{to_lowercase_ascii, validate_header_field};

/// A decoded, validated HTTP/2 header.
#[derive(Debug, Clone, PartialEq)]
pub struct H2Header {
    pub name: String,
    pub value: String,
}

impl H2Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// How strictly decoded header names are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderPolicy {
    /// Reject uppercase names. When unset, uppercase names are accepted and
    /// folded to lowercase.
    pub strict_case: bool,
}

impl Default for HeaderPolicy {
    fn default() -> Self {
        Self { strict_case: true }
    }
}

/// HPACK decoder that only yields fields passing header validation.
/// The dynamic table lives in the wrapped `fluke_hpack::Decoder`, so one
/// instance is kept per connection.
pub struct HpackDecoder {
    inner: fluke_hpack::Decoder<'static>,
    policy: HeaderPolicy,
}

impl std::fmt::Debug for HpackDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HpackDecoder")
            .field("policy", &self.policy)
            .finish()
    }
}

impl Default for HpackDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl HpackDecoder {
    pub fn new() -> Self {
        Self::with_policy(HeaderPolicy::default())
    }

    pub fn with_policy(policy: HeaderPolicy) -> Self {
        Self {
            inner: fluke_hpack::Decoder::new(),
            policy,
        }
    }

    pub fn policy(&self) -> HeaderPolicy {
        self.policy
    }

    /// Decode an HPACK-encoded header block and validate each field.
    pub fn decode(&mut self, data: &[u8]) -> Result<Vec<H2Header>> {
        let pairs = self
            .inner
            .decode(data)
            .map_err(|e| H2Error::HeaderCompression(format!("{:?}", e)))?;

        pairs
            .into_iter()
            .map(|(name, value)| self.accept(name, value))
            .collect()
    }

    fn accept(&self, mut name: Vec<u8>, value: Vec<u8>) -> Result<H2Header> {
        validate_header_field(&name, &value, self.policy.strict_case)?;
        if !self.policy.strict_case {
            to_lowercase_ascii(&mut name);
        }

        // Validated bytes are all ASCII, so these conversions cannot fail.
        let invalid = |bytes: &[u8]| H2Error::InvalidHeaderField {
            name: String::from_utf8_lossy(bytes).into_owned(),
        };
        let value = String::from_utf8(value).map_err(|e| invalid(e.as_bytes()))?;
        let name = String::from_utf8(name).map_err(|e| invalid(e.as_bytes()))?;
        Ok(H2Header { name, value })
    }
}
