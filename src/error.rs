//! Error taxonomy for token issuance and verification.

use thiserror::Error;

/// Errors surfaced by the issue path and configuration loading.
///
/// Verification never returns these; a failed verification is routine
/// traffic and is reported through [`crate::token::VerifyOutcome`].
#[derive(Error, Debug)]
pub enum TokenError {
    /// Caller attempted to issue a token with an empty claims map.
    #[error("claims must not be empty")]
    EmptyClaims,

    /// A structure could not be serialized into a token segment.
    #[error("segment encoding error: {0}")]
    Encoding(String),

    /// A token segment could not be decoded back into a structure.
    #[error("segment decoding error: {0}")]
    Decoding(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl TokenError {
    /// Build a configuration error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        TokenError::Config(msg.into())
    }
}

/// Why a token failed verification outright.
///
/// `Expired` is deliberately not part of this taxonomy: an expired token
/// carries a valid signature and its claims are authentic, so it is a
/// distinct outcome rather than a failure reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The token does not split into exactly three `.`-separated segments.
    Malformed,
    /// The signature does not match the header and claims segments. Covers
    /// tampering, a wrong key, and transport corruption equally; no
    /// distinction is exposed.
    BadSignature,
    /// The signature matched but the claims segment did not decode to a
    /// key/value mapping.
    BadPayload,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InvalidReason::Malformed => "malformed",
            InvalidReason::BadSignature => "bad-signature",
            InvalidReason::BadPayload => "bad-payload",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_reason_display() {
        assert_eq!(InvalidReason::Malformed.to_string(), "malformed");
        assert_eq!(InvalidReason::BadSignature.to_string(), "bad-signature");
        assert_eq!(InvalidReason::BadPayload.to_string(), "bad-payload");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(TokenError::EmptyClaims.to_string(), "claims must not be empty");
        assert_eq!(
            TokenError::config("missing TOKEN_SECRET").to_string(),
            "configuration error: missing TOKEN_SECRET"
        );
    }
}
