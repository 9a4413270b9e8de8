//! Canonical segment encoding
//!
//! A segment is `base64url(json(value))`. Signing and verification both go
//! through these two functions, so the verifier always sees the exact bytes
//! the signer produced.

use crate::error::DecodeError;
use crate::utils::base64url;
use miniserde::{Deserialize, Serialize};

/// Serialize `value` to compact JSON and Base64URL-encode it
pub(crate) fn encode_segment<T: Serialize + ?Sized>(value: &T) -> String {
    base64url::encode(&miniserde::json::to_string(value))
}

/// Base64URL-decode a segment and parse its JSON into `T`
pub(crate) fn decode_segment<T: Deserialize>(
    segment: &str,
    max_size: usize,
) -> Result<T, DecodeError> {
    let json = base64url::decode(segment, max_size)?;
    miniserde::json::from_str(&json).map_err(|e| DecodeError::Json(e.to_string()))
}
