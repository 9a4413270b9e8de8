use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::keys::Secret;
use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// HS256 algorithm (HMAC with SHA-256)
#[derive(Debug, Clone, Copy, Default)]
pub struct HS256;

impl Algorithm for HS256 {
    fn name(&self) -> &'static str {
        "HS256"
    }

    fn sign(&self, signing_input: &str, secret: &Secret) -> Result<String> {
        let mut mac = Hmac::<Sha256>::new_from_slice(secret.usable_bytes()?)
            .map_err(|e| Error::Configuration(format!("HMAC key rejected: {e}")))?;
        mac.update(signing_input.as_bytes());
        Ok(base64url::encode_bytes(&mac.finalize().into_bytes()))
    }

    fn verify(&self, signing_input: &str, signature: &str, secret: &Secret) -> Result<()> {
        let expected_signature = self.sign(signing_input, secret)?;

        // constant_time_eq returns early only on a length mismatch, and the
        // length of an HS256 signature is public
        if constant_time_eq(expected_signature.as_bytes(), signature.as_bytes()) {
            Ok(())
        } else {
            Err(Error::InvalidSignature)
        }
    }
}

/// Compute the HS256 signature segment for an encoded header and payload
///
/// The MAC covers the UTF-8 bytes of `"{encoded_header}.{encoded_payload}"`.
/// An empty secret is a configuration error.
pub fn generate_signature(
    encoded_header: &str,
    encoded_payload: &str,
    secret: &Secret,
) -> Result<String> {
    HS256.sign(&format!("{encoded_header}.{encoded_payload}"), secret)
}
