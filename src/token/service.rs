//! Token issuance and verification.

use crate::error::{InvalidReason, TokenError};
use crate::token::claims::{Claims, EXPIRES_AT, ISSUED_AT};
use crate::token::codec;
use crate::token::signer::{SecretKey, Signer};
use serde::Serialize;

/// TTL applied by [`TokenService::issue`].
pub const DEFAULT_TTL_MINUTES: i64 = 60;

/// Fixed token header; constant across all issued tokens, no negotiation.
#[derive(Serialize)]
struct Header {
    typ: &'static str,
    alg: &'static str,
}

const HEADER: Header = Header {
    typ: "token",
    alg: "HMAC-SHA256",
};

/// A freshly issued token plus caller conveniences.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    /// The compact token string: `header.claims.signature`.
    pub token: String,
    /// Human-readable UTC expiry, `YYYY-MM-DD HH:MM:SS`.
    pub expires_at: String,
    /// The full claims map, including the injected `iat`/`exp`.
    pub claims: Claims,
}

/// Outcome of verifying a token.
///
/// Never a bare boolean: an expired-but-authentic token is a distinct,
/// informative case from a token that fails authentication entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum VerifyOutcome {
    /// Signature checked out and the token has not expired.
    Valid {
        /// The authenticated claims map.
        claims: Claims,
        /// Issued-at epoch seconds; verification time when absent or
        /// non-integer in the payload.
        issued_at: i64,
        /// Expiry epoch seconds; verification time when absent or
        /// non-integer in the payload.
        expires_at: i64,
    },
    /// Signature checked out but the embedded expiry is in the past.
    Expired {
        /// The authenticated (but stale) claims map.
        claims: Claims,
        /// The embedded expiry, epoch seconds.
        expires_at: i64,
    },
    /// The token failed authentication; the claims were never trusted.
    Invalid {
        /// What failed.
        reason: InvalidReason,
    },
}

impl VerifyOutcome {
    /// True only for [`VerifyOutcome::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, VerifyOutcome::Valid { .. })
    }

    /// The authenticated claims, available for valid and expired tokens.
    #[must_use]
    pub fn claims(&self) -> Option<&Claims> {
        match self {
            VerifyOutcome::Valid { claims, .. } | VerifyOutcome::Expired { claims, .. } => {
                Some(claims)
            }
            VerifyOutcome::Invalid { .. } => None,
        }
    }
}

/// Issues and verifies HMAC-SHA256 signed claims tokens.
///
/// Stateless: both operations are pure functions of their inputs, the wall
/// clock, and the static secret injected at construction. Instances are
/// `Send + Sync` and safe to share across threads without coordination.
pub struct TokenService {
    signer: Signer,
}

impl TokenService {
    /// Build a service around the shared secret.
    ///
    /// The secret comes from the caller's configuration or secret store
    /// (see [`crate::Config`]); the service itself never reads the
    /// environment and never exposes the key.
    #[must_use]
    pub fn new(secret: SecretKey) -> Self {
        TokenService {
            signer: Signer::new(&secret),
        }
    }

    /// Issue a token with the default TTL of [`DEFAULT_TTL_MINUTES`].
    pub fn issue(&self, claims: Claims) -> Result<IssuedToken, TokenError> {
        self.issue_with_ttl(claims, DEFAULT_TTL_MINUTES)
    }

    /// Issue a token expiring `ttl_minutes` from now.
    ///
    /// The TTL is deliberately unvalidated: a zero or negative TTL yields
    /// an already-expired token, which is the supported way to mint
    /// expired tokens in tests.
    ///
    /// # Errors
    ///
    /// [`TokenError::EmptyClaims`] if `claims` is empty; rejected before
    /// any cryptography runs.
    pub fn issue_with_ttl(
        &self,
        claims: Claims,
        ttl_minutes: i64,
    ) -> Result<IssuedToken, TokenError> {
        self.issue_at(claims, ttl_minutes, chrono::Utc::now().timestamp())
    }

    fn issue_at(
        &self,
        mut claims: Claims,
        ttl_minutes: i64,
        now: i64,
    ) -> Result<IssuedToken, TokenError> {
        if claims.is_empty() {
            return Err(TokenError::EmptyClaims);
        }

        let expires_at = now.saturating_add(ttl_minutes.saturating_mul(60));
        // Reserved keys always reflect actual issuance time.
        claims.insert(ISSUED_AT, now);
        claims.insert(EXPIRES_AT, expires_at);

        let encoded_header = codec::encode(&HEADER)?;
        let encoded_claims = codec::encode(&claims)?;
        let message = format!("{encoded_header}.{encoded_claims}");
        let signature = self.signer.sign(message.as_bytes());
        let token = format!("{message}.{}", codec::encode_bytes(&signature));

        tracing::debug!(claim_count = claims.len(), expires_at, "issued token");

        Ok(IssuedToken {
            token,
            expires_at: format_timestamp(expires_at),
            claims,
        })
    }

    /// Verify a string purporting to be a token.
    ///
    /// Checks run in a fixed order, each failure its own outcome: segment
    /// count, then signature, then payload decode, then expiry. The
    /// signature check strictly precedes any interpretation of the claims
    /// so that unauthenticated payload content cannot steer the result.
    #[must_use]
    pub fn verify(&self, token: &str) -> VerifyOutcome {
        self.verify_at(token, chrono::Utc::now().timestamp())
    }

    fn verify_at(&self, token: &str, now: i64) -> VerifyOutcome {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return invalid(InvalidReason::Malformed);
        }
        let (encoded_header, encoded_claims, encoded_signature) = (parts[0], parts[1], parts[2]);

        // A signature segment that does not decode is reported the same as
        // a mismatched one; no distinction is leaked.
        let Ok(candidate) = codec::decode_bytes(encoded_signature) else {
            return invalid(InvalidReason::BadSignature);
        };
        let message = format!("{encoded_header}.{encoded_claims}");
        if !self.signer.verify(message.as_bytes(), &candidate) {
            return invalid(InvalidReason::BadSignature);
        }

        let Ok(claims) = codec::decode::<Claims>(encoded_claims) else {
            return invalid(InvalidReason::BadPayload);
        };

        if let Some(expires_at) = claims.expires_at() {
            if expires_at < now {
                tracing::debug!(expires_at, "rejected expired token");
                return VerifyOutcome::Expired { claims, expires_at };
            }
        }

        let issued_at = claims.issued_at().unwrap_or(now);
        let expires_at = claims.expires_at().unwrap_or(now);
        VerifyOutcome::Valid {
            claims,
            issued_at,
            expires_at,
        }
    }
}

fn invalid(reason: InvalidReason) -> VerifyOutcome {
    tracing::debug!(%reason, "rejected token");
    VerifyOutcome::Invalid { reason }
}

/// Epoch seconds as human-readable UTC, `YYYY-MM-DD HH:MM:SS`.
fn format_timestamp(epoch: i64) -> String {
    chrono::DateTime::from_timestamp(epoch, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| epoch.to_string())
}
