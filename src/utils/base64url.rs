//! Base64URL encoding/decoding per RFC 4648 §5
//!
//! Thin wrapper around the `base64` crate. No padding, URL-safe alphabet,
//! and a size limit on everything decoded from untrusted input.

use crate::error::DecodeError;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Encode bytes to Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode Base64URL string to bytes with maximum size limit
pub fn decode_bytes(input: &str, max_size: usize) -> Result<Vec<u8>, DecodeError> {
    // Reject before allocating: every 4 characters decode to 3 bytes
    let lower_bound = input.len() / 4 * 3;
    if lower_bound > max_size {
        return Err(DecodeError::TooLarge {
            size: lower_bound,
            max: max_size,
        });
    }

    let result = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| DecodeError::Base64(e.to_string()))?;

    if result.len() > max_size {
        return Err(DecodeError::TooLarge {
            size: result.len(),
            max: max_size,
        });
    }

    Ok(result)
}

/// Decode Base64URL string to UTF-8 string with size limit
pub fn decode(input: &str, max_size: usize) -> Result<String, DecodeError> {
    let bytes = decode_bytes(input, max_size)?;
    String::from_utf8(bytes).map_err(|e| DecodeError::Utf8(e.to_string()))
}
