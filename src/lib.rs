//! # hstoken - Minimal HMAC-Signed Tokens
//!
//! > Compact, self-contained tokens signed with HMAC-SHA256 and expiring on a
//! > millisecond clock.
//!
//! **hstoken** issues and validates tokens for services that need to hand out a
//! claim set and later check it without keeping session state. A token proves
//! that a holder of the shared secret produced the claims, that they were not
//! changed, and that they have not expired.
//!
//! ## Quick Start
//!
//! ```
//! use hstoken::*;
//!
//! let secret = Secret::from("s3cr3t");
//!
//! let claims = Claims::new().with("sub", "alice");
//! let token = sign(&claims, now_millis() + 1000, &secret)?;
//!
//! let verified = verify(&token, &secret)?;
//! assert_eq!(verified.subject(), Some("alice"));
//! assert!(verified.issued_at().is_some());
//!
//! assert_eq!(verify(&token, &Secret::from("wrong")), Err(Error::InvalidSignature));
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Token Format
//!
//! ```text
//! base64url({"alg":"HS256","typ":"JWT"})
//!     . base64url({...claims, "iat": <ms>, "exp": <ms>})
//!     . base64url(HMAC-SHA256(header "." payload, secret))
//! ```
//!
//! Base64URL uses the RFC 4648 §5 alphabet without `=` padding. `iat` and `exp`
//! are **milliseconds** since the Unix epoch, not the seconds used by RFC 7519.
//! The wire format is otherwise an ordinary HS256 JWS, so other JWT libraries
//! can read the tokens.
//!
//! ## Verification Flow
//!
//! ```text
//! split (3 non-empty segments)      → Error::MalformedToken
//! recompute + constant-time compare → Error::InvalidSignature
//! decode header and payload         → Error::MalformedToken
//! check exp against now             → Error::ExpiredToken
//! ```
//!
//! A missing or non-numeric `exp` is treated as expired. An empty secret fails
//! both signing and verification with `Error::Configuration`.
//!
//! ## Security
//!
//! ### Timing Attack Protection
//!
//! Signature comparison uses the [`constant_time_eq`](https://crates.io/crates/constant_time_eq)
//! crate, so response latency does not reveal how many leading bytes of a
//! forged signature were correct.
//!
//! ### Algorithm Confusion
//!
//! The verifier always computes HS256; the token header cannot select a
//! different algorithm. A header naming anything other than `HS256` (including
//! `"none"`) is rejected even when its MAC is valid.
//!
//! ### Secrets
//!
//! The secret is passed explicitly on every call. [`Secret`]'s `Debug` output is
//! redacted, and neither secrets nor tokens are ever written to `tracing` events.
//!
//! ## Logging
//!
//! The crate emits `tracing` events at `debug` (token signed, token rejected
//! with its error kind) and `trace` (signature verified) level. Install any
//! subscriber to see them.
//!
//! ## References
//!
//! - [RFC 2104](https://datatracker.ietf.org/doc/html/rfc2104): HMAC
//! - [RFC 4648](https://datatracker.ietf.org/doc/html/rfc4648#section-5): Base64URL
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515): JSON Web Signature (JWS)

// Core modules
pub mod error;
pub(crate) mod limits;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;

// Claims and validation
pub mod claims;

// Token types
pub mod token;

// Signing and verification (main public API)
pub mod signer;
pub mod validator;

// ============================================================================
// PUBLIC API
// ============================================================================

// Main operations
pub use signer::sign;
pub use validator::{verify, verify_with};

// Configuration types
pub use claims::Validation;
pub use keys::Secret;

// Supporting types
pub use algorithm::{generate_signature, Algorithm, AlgorithmId, HS256};
pub use claims::{ClaimValue, Claims};
pub use error::{DecodeError, Error, Malformed, Result};
pub use token::{ParsedToken, TokenHeader};
pub use utils::now_millis;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_full_flow_hmac() {
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        // Create a token manually
        let header = r#"{"alg":"HS256","typ":"JWT"}"#;
        let now = now_millis();
        let payload = format!(r#"{{"sub":"user123","exp":{},"iat":{}}}"#, now + 3_600_000, now);

        let header_b64 = utils::base64url::encode(header);
        let payload_b64 = utils::base64url::encode(&payload);
        let signing_input = format!("{}.{}", header_b64, payload_b64);

        let secret = b"my-secret-key";
        let mut mac = Hmac::<Sha256>::new_from_slice(secret).unwrap();
        mac.update(signing_input.as_bytes());
        let signature_bytes = mac.finalize().into_bytes();
        let signature_b64 = utils::base64url::encode_bytes(&signature_bytes);

        let token_str = format!("{}.{}", signing_input, signature_b64);

        let claims = verify(&token_str, &Secret::from(secret)).expect("Verification failed");
        assert_eq!(claims.subject(), Some("user123"));
        assert_eq!(claims.expiration(), Some(now + 3_600_000));
    }

    #[test]
    fn test_signer_matches_manual_construction() {
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let token = signer::sign_at(
            &Claims::new().with("sub", "user123"),
            2_000,
            &Secret::from("my-secret-key"),
            1_000,
        )
        .unwrap();

        let header_b64 = utils::base64url::encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload_b64 = utils::base64url::encode(r#"{"exp":2000,"iat":1000,"sub":"user123"}"#);
        let signing_input = format!("{}.{}", header_b64, payload_b64);

        let mut mac = Hmac::<Sha256>::new_from_slice(b"my-secret-key").unwrap();
        mac.update(signing_input.as_bytes());
        let signature_b64 = utils::base64url::encode_bytes(&mac.finalize().into_bytes());

        assert_eq!(token, format!("{}.{}", signing_input, signature_b64));
    }

    #[test]
    fn test_signature_verification_fails() {
        let header = r#"{"alg":"HS256"}"#;
        let payload = format!(r#"{{"sub":"user","exp":{}}}"#, now_millis() + 60_000);
        let token_str = format!(
            "{}.{}.{}",
            utils::base64url::encode(header),
            utils::base64url::encode(&payload),
            utils::base64url::encode("wrong_signature")
        );

        let result = verify(&token_str, &Secret::from("secret"));
        assert!(matches!(result, Err(Error::InvalidSignature)));
    }

    #[test]
    fn test_expired_token_fails() {
        let secret = Secret::from("secret");
        let token = sign(&Claims::new(), now_millis() - 3_600_000, &secret).unwrap();

        let result = verify(&token, &secret);
        assert!(matches!(
            result,
            Err(Error::ExpiredToken {
                expired_at: Some(_),
                ..
            })
        ));
    }
}
