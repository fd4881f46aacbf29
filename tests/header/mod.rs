//! Integration tests for header field validation

mod decoding;
mod value_validation;
