//! Error catalog and crate error type.
//!
//! Library error codes are negative integers. `error_text` maps any integer
//! to a fixed diagnostic string and is total: unrecognized codes map to
//! `"Unknown error code"`.

use std::fmt;

/// Library error codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidArgument = -501,
    UnsupportedVersion = -503,
    WouldBlock = -504,
    Proto = -505,
    InvalidFrame = -506,
    Eof = -507,
    Deferred = -508,
    StreamIdNotAvailable = -509,
    StreamClosed = -510,
    StreamClosing = -511,
    StreamShutWr = -512,
    InvalidStreamId = -513,
    InvalidStreamState = -514,
    DeferredDataExist = -515,
    StartStreamNotAllowed = -516,
    GoawayAlreadySent = -517,
    InvalidHeaderBlock = -518,
    InvalidState = -519,
    Gzip = -520,
    TemporalCallbackFailure = -521,
    FrameSizeError = -522,
    HeaderComp = -523,
    FlowControl = -524,
    Fatal = -900,
    NoMem = -901,
    CallbackFailure = -902,
}

const ALL_CODES: [ErrorCode; 26] = [
    ErrorCode::InvalidArgument,
    ErrorCode::UnsupportedVersion,
    ErrorCode::WouldBlock,
    ErrorCode::Proto,
    ErrorCode::InvalidFrame,
    ErrorCode::Eof,
    ErrorCode::Deferred,
    ErrorCode::StreamIdNotAvailable,
    ErrorCode::StreamClosed,
    ErrorCode::StreamClosing,
    ErrorCode::StreamShutWr,
    ErrorCode::InvalidStreamId,
    ErrorCode::InvalidStreamState,
    ErrorCode::DeferredDataExist,
    ErrorCode::StartStreamNotAllowed,
    ErrorCode::GoawayAlreadySent,
    ErrorCode::InvalidHeaderBlock,
    ErrorCode::InvalidState,
    ErrorCode::Gzip,
    ErrorCode::TemporalCallbackFailure,
    ErrorCode::FrameSizeError,
    ErrorCode::HeaderComp,
    ErrorCode::FlowControl,
    ErrorCode::Fatal,
    ErrorCode::NoMem,
    ErrorCode::CallbackFailure,
];

impl ErrorCode {
    /// Raw integer value of this code.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Human-readable diagnostic text, if the catalog defines one.
    ///
    /// `FlowControl` and `Fatal` have no catalog entry.
    pub fn text(self) -> Option<&'static str> {
        let text = match self {
            ErrorCode::InvalidArgument => "Invalid argument",
            ErrorCode::UnsupportedVersion => "Unsupported SPDY version",
            ErrorCode::WouldBlock => "Operation would block",
            ErrorCode::Proto => "Protocol error",
            ErrorCode::InvalidFrame => "Invalid frame octets",
            ErrorCode::Eof => "EOF",
            ErrorCode::Deferred => "Data transfer deferred",
            ErrorCode::StreamIdNotAvailable => "No more Stream ID available",
            ErrorCode::StreamClosed => "Stream was already closed or invalid",
            ErrorCode::StreamClosing => "Stream is closing",
            ErrorCode::StreamShutWr => "The transmission is not allowed for this stream",
            ErrorCode::InvalidStreamId => "Stream ID is invalid",
            ErrorCode::InvalidStreamState => "Invalid stream state",
            ErrorCode::DeferredDataExist => "Another DATA frame has already been deferred",
            ErrorCode::StartStreamNotAllowed => "request HEADERS is not allowed",
            ErrorCode::GoawayAlreadySent => "GOAWAY has already been sent",
            ErrorCode::InvalidHeaderBlock => "Invalid header block",
            ErrorCode::InvalidState => "Invalid state",
            ErrorCode::Gzip => "Gzip error",
            ErrorCode::TemporalCallbackFailure => {
                "The user callback function failed due to the temporal error"
            }
            ErrorCode::FrameSizeError => "The length of the frame is invalid",
            ErrorCode::HeaderComp => "Header compression/decompression error",
            ErrorCode::FlowControl | ErrorCode::Fatal => return None,
            ErrorCode::NoMem => "Out of memory",
            ErrorCode::CallbackFailure => "The user callback function failed",
        };
        Some(text)
    }

    /// Fatal codes leave the session unusable; the caller must tear it down.
    pub fn is_fatal(self) -> bool {
        self.as_i32() <= ErrorCode::Fatal.as_i32()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", error_text(self.as_i32()), self.as_i32())
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = i32;

    fn try_from(code: i32) -> std::result::Result<Self, Self::Error> {
        ALL_CODES
            .iter()
            .copied()
            .find(|c| c.as_i32() == code)
            .ok_or(code)
    }
}

/// Diagnostic text for a raw error code.
///
/// `0` is success; every other value without catalog text yields
/// `"Unknown error code"`.
pub fn error_text(code: i32) -> &'static str {
    if code == 0 {
        return "Success";
    }
    ErrorCode::try_from(code)
        .ok()
        .and_then(ErrorCode::text)
        .unwrap_or("Unknown error code")
}

/// Errors raised by the buffer, ledger and header-validation layers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum H2Error {
    /// Buffer growth could not be satisfied. The buffer is unchanged.
    #[error("Out of memory")]
    OutOfMemory,

    /// A window adjustment would violate protocol bounds. The ledger is unchanged.
    #[error("Flow control error")]
    FlowControl,

    /// A header name or value contains bytes not allowed on the wire.
    #[error("Invalid header block: {name:?}")]
    InvalidHeaderField { name: String },

    #[error("Header compression/decompression error: {0}")]
    HeaderCompression(String),
}

impl H2Error {
    /// Catalog code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            H2Error::OutOfMemory => ErrorCode::NoMem,
            H2Error::FlowControl => ErrorCode::FlowControl,
            H2Error::InvalidHeaderField { .. } => ErrorCode::InvalidHeaderBlock,
            H2Error::HeaderCompression(_) => ErrorCode::HeaderComp,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.code().is_fatal()
    }
}

pub type Result<T> = std::result::Result<T, H2Error>;
