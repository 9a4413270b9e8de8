//! Token verification
//!
//! Verification runs a fixed pipeline with no retries:
//!
//! ```text
//! token string
//!     │ split into three non-empty segments      → MalformedToken
//!     ▼
//! ParsedToken
//!     │ recompute HS256 over header.payload      → Configuration (empty secret)
//!     │ constant-time compare with signature     → InvalidSignature
//!     ▼
//! authenticated segments
//!     │ decode header (alg must be HS256)        → MalformedToken
//!     │ decode payload as a JSON object          → MalformedToken
//!     ▼
//! Claims
//!     │ exp must be numeric and after now        → ExpiredToken
//!     ▼
//! Claims (returned)
//! ```
//!
//! Nothing is decoded before the MAC has been checked.

use crate::algorithm::{Algorithm, HS256};
use crate::claims::{validate_expiration, Claims, Validation};
use crate::error::Result;
use crate::keys::Secret;
use crate::limits::{MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE};
use crate::token::codec::decode_segment;
use crate::token::{ParsedToken, TokenHeader};
use crate::utils::now_millis;
use miniserde::json::Object;

/// Verify a token with the default [`Validation`]
///
/// Returns the decoded claim set, including `iat` and `exp`.
///
/// # Example
/// ```
/// use hstoken::{now_millis, sign, verify, Claims, Error, Secret};
///
/// let token = sign(&Claims::new().with("sub", "alice"), now_millis() + 1000, &"s3cr3t".into())?;
///
/// let claims = verify(&token, &Secret::from("s3cr3t"))?;
/// assert_eq!(claims.subject(), Some("alice"));
///
/// assert_eq!(verify(&token, &Secret::from("wrong")), Err(Error::InvalidSignature));
/// # Ok::<(), hstoken::Error>(())
/// ```
pub fn verify(token: &str, secret: &Secret) -> Result<Claims> {
    verify_with(token, secret, &Validation::default())
}

/// Verify a token with an explicit [`Validation`] configuration
pub fn verify_with(token: &str, secret: &Secret, config: &Validation) -> Result<Claims> {
    verify_at(token, secret, config, now_millis())
}

/// Verify against an explicit current time (milliseconds since the Unix epoch)
pub(crate) fn verify_at(
    token: &str,
    secret: &Secret,
    config: &Validation,
    now: i64,
) -> Result<Claims> {
    run_pipeline(token, secret, config, now).inspect_err(|err| {
        tracing::debug!(error = %err, "token rejected");
    })
}

fn run_pipeline(token: &str, secret: &Secret, config: &Validation, now: i64) -> Result<Claims> {
    config.check()?;

    // 1. Parse
    let parsed = ParsedToken::from_string(token)?;

    // 2-3. Recompute and compare in constant time
    HS256.verify(parsed.signing_input(), parsed.signature(), secret)?;
    tracing::trace!("signature verified");

    // 4. Decode (authenticated data from here on)
    let header: TokenHeader = decode_segment(parsed.header(), MAX_DECODED_HEADER_SIZE)?;
    // Only HS256 parses; anything else was signed by a misconfigured issuer
    header.parse_algorithm()?;

    let payload: Object = decode_segment(parsed.payload(), MAX_DECODED_PAYLOAD_SIZE)?;
    let claims = Claims::from(payload);

    // 5. Check expiry
    validate_expiration(&claims, config, now)?;

    Ok(claims)
}
