//! Session claims for GroupPlan clients
//!
//! Reads the session token from a cookie and decodes its claims. Decoding
//! never checks the signature; verification is a separate, opt-in step that
//! needs the issuer's HMAC secret. Axum extractors work with any state
//! implementing `FromRef<S>` for `ClaimsReader`.

mod claims;
mod config;
mod error;
mod extractors;
mod issuer;
mod jar;
mod jwt;
mod reader;

pub use claims::{Claims, SessionClaims};
pub use config::AuthConfig;
pub use error::ClaimsError;
pub use extractors::{CookieClaims, VerifiedSession};
pub use issuer::TokenIssuer;
pub use jar::{CookieJar, CookieStore};
pub use jwt::{decode_payload, verify_session_token};
pub use reader::{read_claims, ClaimsReader};
