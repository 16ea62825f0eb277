//! Signed-token service.
//!
//! Issues and verifies compact, self-contained claims tokens authenticated
//! with HMAC-SHA256 under a single static symmetric key. A token is three
//! base64url segments joined by `.`: a fixed header, the claims (with
//! injected `iat`/`exp` timestamps), and the signature over the first two
//! segments. The service is stateless; expiry is the only deactivation
//! mechanism.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod token;

// Re-exports for convenience
pub use config::Config;
pub use error::{InvalidReason, TokenError};
pub use token::{Claims, IssuedToken, SecretKey, Signer, TokenService, VerifyOutcome};
