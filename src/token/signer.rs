//! HMAC-SHA256 signing over encoded token segments.

use ring::hmac;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length in bytes of an HMAC-SHA256 signature.
pub const SIGNATURE_LEN: usize = 32;

/// Static symmetric secret shared by issuer and verifier.
///
/// Zeroed on drop. The key material is never logged, serialized, or
/// embedded in a token; `Debug` is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Wrap raw key bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        SecretKey(bytes)
    }

    /// The raw key bytes.
    #[must_use]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// True when the key carries no material.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SecretKey {
    fn from(s: &str) -> Self {
        SecretKey(s.as_bytes().to_vec())
    }
}

impl From<String> for SecretKey {
    fn from(s: String) -> Self {
        SecretKey(s.into_bytes())
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// Produces and checks message authentication codes with one static key.
pub struct Signer {
    key: hmac::Key,
}

impl Signer {
    /// Build a signer from the shared secret.
    #[must_use]
    pub fn new(secret: &SecretKey) -> Self {
        Signer {
            key: hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes()),
        }
    }

    /// HMAC-SHA256 over `message`; always [`SIGNATURE_LEN`] bytes.
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        hmac::sign(&self.key, message).as_ref().to_vec()
    }

    /// Recompute the signature for `message` and compare it to `candidate`.
    ///
    /// The comparison is constant-time in the signature bytes; a
    /// wrong-length candidate is rejected without leaking anything beyond
    /// its length, which is not secret.
    #[must_use]
    pub fn verify(&self, message: &[u8], candidate: &[u8]) -> bool {
        let expected = hmac::sign(&self.key, message);
        expected.as_ref().ct_eq(candidate).into()
    }
}
