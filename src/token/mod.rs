//! Token core: claims model, segment codec, HMAC signer, and the service
//! that assembles them into the issue/verify operations.

pub mod claims;
pub mod codec;
pub mod service;
pub mod signer;

pub use claims::Claims;
pub use service::{IssuedToken, TokenService, VerifyOutcome};
pub use signer::{SecretKey, Signer};
