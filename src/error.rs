//! Error types for token signing and verification
//!
//! Every failure is surfaced as a distinct [`Error`] variant so callers can
//! tell a tampered token from an expired one without string matching.

use thiserror::Error;

/// Errors returned by [`sign`](crate::sign) and [`verify`](crate::verify)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Malformed token: {0}")]
    MalformedToken(#[from] Malformed),

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    InvalidSignature,

    // ============================================================================
    // Token Errors
    // ============================================================================
    /// `expired_at` is `None` when the payload carries no numeric `exp` claim.
    /// A fractional `exp` is reported rounded up to whole milliseconds.
    #[error("Token expired at {expired_at:?} (now: {now}, leeway: {leeway}ms)")]
    ExpiredToken {
        expired_at: Option<i64>,
        now: i64,
        leeway: u64,
    },
}

/// Reasons a token string could not be taken apart
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Malformed {
    #[error("token too large: {size} bytes (maximum: {max} bytes)")]
    TooLarge { size: usize, max: usize },

    #[error("expected three parts separated by '.', found {0}")]
    SegmentCount(usize),

    #[error("{0} segment is empty")]
    EmptySegment(&'static str),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("algorithm '{0}' does not match HS256")]
    UnexpectedAlgorithm(String),
}

/// Failures of the canonical decoder (base64url -> UTF-8 -> JSON)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Base64URL decoding failed: {0}")]
    Base64(String),

    #[error("decoded size exceeds limit: {size} bytes (maximum: {max} bytes)")]
    TooLarge { size: usize, max: usize },

    #[error("invalid UTF-8: {0}")]
    Utf8(String),

    #[error("JSON parsing failed: {0}")]
    Json(String),
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::MalformedToken(Malformed::Decode(err))
    }
}

/// Result type alias for hstoken operations
pub type Result<T> = std::result::Result<T, Error>;
