//! Size limit constants for input validation

/// Maximum length for a token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum size for decoded header JSON (8KB)
/// The fixed HS256 header is 27 bytes, anything close to this bound is hostile
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Maximum size for decoded payload JSON (48KB)
/// Base64URL adds ~33% overhead, so a full-size token cannot decode past this
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 48 * 1024;

/// Maximum leeway applied to the `exp` check (5 minutes, in milliseconds)
/// Prevents leeway from effectively disabling expiration checks
pub(crate) const MAX_LEEWAY_MILLIS: u64 = 5 * 60 * 1000;
