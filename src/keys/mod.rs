//! Shared secret for HMAC signing and verification
//!
//! The secret is supplied by the caller on every call; nothing in this crate
//! stores one globally. Its `Debug` output is redacted and it has no `Display`,
//! so it cannot end up in logs or error messages by accident.
use crate::error::{Error, Result};

/// A symmetric key shared out-of-band between signer and verifier
///
/// HMAC pads keys shorter than the SHA-256 block (64 bytes) with zero bytes,
/// so two such secrets that differ only in trailing `\0` bytes produce the
/// same signatures. Secrets derived from text or random bytes of a fixed
/// length are not affected.
#[derive(Clone)]
pub struct Secret {
    bytes: Vec<u8>,
}

impl Secret {
    /// Create a secret from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Return the key bytes, or a configuration error for an empty secret
    ///
    /// HMAC accepts a zero-length key, but a MAC keyed with nothing
    /// authenticates nothing.
    pub(crate) fn usable_bytes(&self) -> Result<&[u8]> {
        if self.bytes.is_empty() {
            return Err(Error::Configuration("secret must not be empty".into()));
        }
        Ok(&self.bytes)
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

impl From<&[u8]> for Secret {
    fn from(value: &[u8]) -> Self {
        Self::new(value)
    }
}

impl<const N: usize> From<&[u8; N]> for Secret {
    fn from(value: &[u8; N]) -> Self {
        Self::new(value.as_slice())
    }
}

impl From<Vec<u8>> for Secret {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}
