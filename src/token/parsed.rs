use crate::error::{Malformed, Result};
use crate::limits::MAX_TOKEN_LENGTH;

/// A token split into its three encoded segments
///
/// Nothing is decoded at this stage; the segments are borrowed from the input
/// string and are untrusted until the signature has been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedToken<'a> {
    raw: &'a str,
    header_b64: &'a str,
    payload_b64: &'a str,
    signature_b64: &'a str,
}

impl<'a> ParsedToken<'a> {
    /// Split a token string of the form `header.payload.signature`
    ///
    /// # Example
    /// ```
    /// use hstoken::ParsedToken;
    ///
    /// let parsed = ParsedToken::from_string("aGVhZA.Ym9keQ.c2ln").unwrap();
    /// assert_eq!(parsed.signing_input(), "aGVhZA.Ym9keQ");
    /// assert_eq!(parsed.signature(), "c2ln");
    /// ```
    pub fn from_string(token: &'a str) -> Result<Self> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Malformed::TooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            }
            .into());
        }

        let parts: Vec<&str> = token.split('.').collect();
        let [header_b64, payload_b64, signature_b64] = parts[..] else {
            return Err(Malformed::SegmentCount(parts.len()).into());
        };

        for (name, segment) in [
            ("header", header_b64),
            ("payload", payload_b64),
            ("signature", signature_b64),
        ] {
            if segment.is_empty() {
                return Err(Malformed::EmptySegment(name).into());
            }
        }

        Ok(Self {
            raw: token,
            header_b64,
            payload_b64,
            signature_b64,
        })
    }

    /// Encoded header segment
    pub fn header(&self) -> &'a str {
        self.header_b64
    }

    /// Encoded payload segment
    ///
    /// Note: You should not trust this data until after signature verification!
    pub fn payload(&self) -> &'a str {
        self.payload_b64
    }

    /// Encoded signature segment
    pub fn signature(&self) -> &'a str {
        self.signature_b64
    }

    /// Get the signing input (header.payload)
    pub fn signing_input(&self) -> &'a str {
        &self.raw[..self.header_b64.len() + 1 + self.payload_b64.len()]
    }
}
