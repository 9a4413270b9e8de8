//! Token issuance
//!
//! [`sign`] turns a claim set, an expiry instant and a secret into a token
//! string. The signer adds `iat` itself; the caller cannot choose it.

use crate::algorithm::generate_signature;
use crate::claims::{Claims, EXPIRATION, ISSUED_AT};
use crate::error::Result;
use crate::keys::Secret;
use crate::token::codec::encode_segment;
use crate::token::TokenHeader;
use crate::utils::now_millis;

/// Sign a claim set into a token
///
/// The payload is `claims` with `iat` set to the current time and `exp` set to
/// `expires_at`, both in milliseconds since the Unix epoch. Either key in
/// `claims` is overwritten. An `expires_at` in the past still produces a
/// token; rejecting it is the verifier's job.
///
/// # Errors
/// [`Error::Configuration`](crate::Error::Configuration) if `secret` is empty.
///
/// # Example
/// ```
/// use hstoken::{now_millis, sign, verify, Claims, Secret};
///
/// let secret = Secret::from("s3cr3t");
/// let token = sign(&Claims::new().with("sub", "alice"), now_millis() + 60_000, &secret)?;
///
/// assert_eq!(token.split('.').count(), 3);
/// assert_eq!(verify(&token, &secret)?.subject(), Some("alice"));
/// # Ok::<(), hstoken::Error>(())
/// ```
pub fn sign(claims: &Claims, expires_at: i64, secret: &Secret) -> Result<String> {
    sign_at(claims, expires_at, secret, now_millis())
}

/// Sign with an explicit issued-at instant
pub(crate) fn sign_at(
    claims: &Claims,
    expires_at: i64,
    secret: &Secret,
    issued_at: i64,
) -> Result<String> {
    // Fail before doing any encoding work
    secret.usable_bytes()?;

    let header = TokenHeader::hs256();

    let mut payload = claims.clone();
    payload.set_timestamp(ISSUED_AT, issued_at);
    payload.set_timestamp(EXPIRATION, expires_at);

    let header_b64 = encode_segment(&header);
    let payload_b64 = encode_segment(payload.as_object());
    let signature_b64 = generate_signature(&header_b64, &payload_b64, secret)?;

    tracing::debug!(
        alg = header.algorithm_str(),
        claims = payload.len(),
        exp = expires_at,
        "signed token"
    );

    Ok(format!("{header_b64}.{payload_b64}.{signature_b64}"))
}
