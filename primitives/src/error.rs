//! Error types for the seedbridge adapter.
//!
//! `StatusCode` values cross the C boundary and are part of the ABI.
//! `BridgeError` is the Rust-side taxonomy; every variant maps onto exactly
//! one status code via [`BridgeError::status`].

use core::fmt;

/// Status codes returned across the boundary.
///
/// `0` = OK, non-zero = error. These repr values MUST NOT change without
/// bumping `API_VERSION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum StatusCode {
    Ok = 0,
    BadPointer = 1,
    InvalidEncoding = 2,
    InvalidWordCount = 3,
    UnsupportedLanguage = 4,
    EntropyUnavailable = 5,
    AllocationFailed = 6,
    InvalidPhrase = 7,
    Internal = 8,
}

impl StatusCode {
    /// Convert from a raw status returned by an exported function.
    pub fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::BadPointer),
            2 => Some(Self::InvalidEncoding),
            3 => Some(Self::InvalidWordCount),
            4 => Some(Self::UnsupportedLanguage),
            5 => Some(Self::EntropyUnavailable),
            6 => Some(Self::AllocationFailed),
            7 => Some(Self::InvalidPhrase),
            8 => Some(Self::Internal),
            _ => None,
        }
    }

    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Stable upper-case name, also used as the C-visible message.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BadPointer => "ERR_BAD_POINTER",
            Self::InvalidEncoding => "ERR_INVALID_ENCODING",
            Self::InvalidWordCount => "ERR_INVALID_WORD_COUNT",
            Self::UnsupportedLanguage => "ERR_UNSUPPORTED_LANGUAGE",
            Self::EntropyUnavailable => "ERR_ENTROPY_UNAVAILABLE",
            Self::AllocationFailed => "ERR_ALLOCATION_FAILED",
            Self::InvalidPhrase => "ERR_INVALID_PHRASE",
            Self::Internal => "ERR_INTERNAL",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why input bytes could not be turned into a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("input is not valid UTF-8 (first bad byte at {0})")]
    Utf8(usize),

    #[error("input is {len} bytes, limit is {max}")]
    TooLong { len: usize, max: usize },

    #[error("expected a word count, found {0:?}")]
    NotNumeric(String),

    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
}

/// The entropy source could not deliver secure random bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("secure entropy source unavailable: {0}")]
pub struct EntropyError(pub String);

/// Top-level error type for the adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// Input bytes were not a decodable request. Only surfaced when the
    /// malformed-input policy is `Reject`.
    #[error("malformed input: {0}")]
    InputDecode(#[from] DecodeError),

    /// A numeric word count outside {12, 15, 18, 21, 24}.
    #[error("word count {0} is not one of 12, 15, 18, 21, 24")]
    InvalidWordCount(String),

    #[error("unsupported language {0:?}")]
    UnsupportedLanguage(String),

    /// Fatal: no weaker randomness is ever substituted.
    #[error(transparent)]
    EntropySource(#[from] EntropyError),

    /// The outbound buffer could not be allocated.
    #[error("could not allocate {0} bytes for the outbound buffer")]
    Allocation(usize),

    #[error("invalid phrase: {0}")]
    InvalidPhrase(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl BridgeError {
    /// Status code this error is reported as at the boundary.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InputDecode(_) => StatusCode::InvalidEncoding,
            Self::InvalidWordCount(_) => StatusCode::InvalidWordCount,
            Self::UnsupportedLanguage(_) => StatusCode::UnsupportedLanguage,
            Self::EntropySource(_) => StatusCode::EntropyUnavailable,
            Self::Allocation(_) => StatusCode::AllocationFailed,
            Self::InvalidPhrase(_) => StatusCode::InvalidPhrase,
            Self::Internal(_) => StatusCode::Internal,
        }
    }

    /// True for the validation failures that must never be defaulted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidWordCount(_) | Self::UnsupportedLanguage(_)
        )
    }
}

impl From<&BridgeError> for StatusCode {
    fn from(err: &BridgeError) -> Self {
        err.status()
    }
}

/// Convenience result type for the adapter.
pub type BridgeResult<T> = core::result::Result<T, BridgeError>;
