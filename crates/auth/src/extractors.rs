//! Axum extractors for session claims
//!
//! Generic over any state `S` where `ClaimsReader: FromRef<S>`.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::claims::{Claims, SessionClaims};
use crate::error::ClaimsError;
use crate::reader::ClaimsReader;

/// Claims from the session cookie, signature not checked
#[derive(Debug)]
pub struct CookieClaims(pub Claims);

impl<S> FromRequestParts<S> for CookieClaims
where
    ClaimsReader: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ClaimsError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let reader = ClaimsReader::from_ref(state);
        let claims = reader.claims(&parts.headers)?;
        Ok(CookieClaims(claims))
    }
}

/// Session claims from a verified session cookie.
///
/// Rejects with 500 when no secret is configured rather than falling back
/// to the unverified read.
#[derive(Debug)]
pub struct VerifiedSession(pub SessionClaims);

impl<S> FromRequestParts<S> for VerifiedSession
where
    ClaimsReader: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ClaimsError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let reader = ClaimsReader::from_ref(state);
        let session = reader.verify(&parts.headers)?;
        Ok(VerifiedSession(session))
    }
}
