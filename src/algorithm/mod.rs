//! Algorithm support for token signing and verification
//!
//! Exactly one algorithm is supported: HS256. The [`Algorithm`] trait is the
//! seam for adding others; the verifier never picks an implementation based on
//! the token's own header.

pub mod hmac;

use crate::error::{Error, Result};
use crate::keys::Secret;

pub use self::hmac::{generate_signature, HS256};

/// Algorithm identifier from the token header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmId {
    HS256,
}

impl AlgorithmId {
    /// Parse an algorithm name
    ///
    /// Matching is exact and case-sensitive, so `"none"`, `"None"` and
    /// `"hs256"` are all rejected.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "HS256" => Ok(AlgorithmId::HS256),
            other => Err(Error::MalformedToken(
                crate::error::Malformed::UnexpectedAlgorithm(other.to_string()),
            )),
        }
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HS256",
        }
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Core algorithm trait for token MAC algorithms
pub trait Algorithm {
    /// Identifier written into the header's `alg` field
    fn name(&self) -> &'static str;

    /// Compute the Base64URL-encoded signature over `signing_input`
    fn sign(&self, signing_input: &str, secret: &Secret) -> Result<String>;

    /// Check a Base64URL-encoded signature over `signing_input`
    ///
    /// Returns `Err(Error::InvalidSignature)` on mismatch.
    fn verify(&self, signing_input: &str, signature: &str, secret: &Secret) -> Result<()>;
}
