use crate::algorithm::AlgorithmId;
use crate::error::Result;
use miniserde::{Deserialize, Serialize};

/// Token type marker written into every header
pub const TOKEN_TYPE: &str = "JWT";

/// Token header structure
///
/// Field order is the serialization order: `{"alg":"HS256","typ":"JWT"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenHeader {
    /// Algorithm used for signing
    #[serde(rename = "alg")]
    pub algorithm: String,

    /// Token type (typically "JWT")
    #[serde(rename = "typ")]
    pub token_type: Option<String>,
}

impl TokenHeader {
    /// The fixed header produced by the signer
    pub fn hs256() -> Self {
        Self {
            algorithm: AlgorithmId::HS256.as_str().to_string(),
            token_type: Some(TOKEN_TYPE.to_string()),
        }
    }

    /// Parse algorithm from header
    pub fn parse_algorithm(&self) -> Result<AlgorithmId> {
        AlgorithmId::from_str(&self.algorithm)
    }

    /// Get algorithm as string
    pub fn algorithm_str(&self) -> &str {
        &self.algorithm
    }
}
