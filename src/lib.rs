//! h2-guard: overflow-safe HTTP/2 bookkeeping, sans-I/O
//!
//! This crate holds the parts of an HTTP/2 endpoint that process values
//! derived from untrusted peer input and must be bit-exact:
//!
//! - **Flow Control**: a per-stream / per-connection receive window ledger
//!   that reconciles the advertised window, consumed bytes and pending
//!   window reductions
//! - **Header Validation**: token-table checks for header names (including
//!   pseudo-headers) and values before they reach application code
//! - **HPACK Validation**: a `fluke-hpack` decoder that rejects header blocks
//!   carrying invalid fields
//! - **Binary Helpers**: big-endian packing and a 4 KiB-step growable buffer
//!   for the frame layer
//! - **Error Catalog**: fixed diagnostic text for every library error code
//!
//! # Quick Start
//!
//! ```rust
//! use h2_guard::{validate_header_name, WindowConfig};
//!
//! let mut window = WindowConfig::new().stream_window().unwrap();
//!
//! // Peer sends 40 000 bytes of DATA
//! window.record_received(40_000).unwrap();
//! if let Some(increment) = window.take_window_update() {
//!     println!("send WINDOW_UPDATE {}", increment);
//! }
//!
//! // Application shrinks the window by 10 000 bytes; nothing to send
//! assert_eq!(window.adjust_local_window_size(-10_000).unwrap(), 0);
//!
//! assert!(validate_header_name(b":path", true));
//! assert!(!validate_header_name(b"Content-Type", true));
//! ```
//!
//! # Architecture
//!
//! It does NOT provide:
//! - Frame parsing or serialization
//! - Deciding when a WINDOW_UPDATE frame goes on the wire
//! - HPACK compression itself
//!
//! Every operation is synchronous and free of I/O. A [`WindowState`] needs
//! one mutator at a time; the validators and codec are pure functions.

pub mod buffer;
pub mod codec;
pub mod error;
pub mod flow_control;
pub mod header;
pub mod hpack;

pub use buffer::{reserve_buffer, GrowableBuffer, BUFFER_GROWTH_STEP};
pub use codec::{get_be16, get_be32, put_be16, put_be32};
pub use error::{error_text, ErrorCode, H2Error, Result};
pub use flow_control::{
    should_send_window_update, WindowConfig, WindowState, DEFAULT_INITIAL_WINDOW_SIZE,
    MAX_WINDOW_SIZE,
};
pub use header::{
    to_lowercase_ascii, validate_header_field, validate_header_name, validate_header_value,
};
pub use hpack::{H2Header, HeaderPolicy, HpackDecoder};
