//! Session claims reader
//!
//! Stateless service injected where session claims are needed. Reading is
//! a single synchronous lookup plus decode; nothing is cached.

use crate::claims::{Claims, SessionClaims};
use crate::config::AuthConfig;
use crate::jar::CookieStore;
use crate::error::ClaimsError;
use crate::jwt::{decode_payload, verify_session_token};

/// Read the claims of the token stored in cookie `cookie_name`.
///
/// The signature is not checked.
pub fn read_claims<C>(store: &C, cookie_name: &str) -> Result<Claims, ClaimsError>
where
    C: CookieStore + ?Sized,
{
    let token = store.cookie(cookie_name).ok_or_else(|| {
        tracing::debug!(cookie = %cookie_name, "Session cookie not present");
        ClaimsError::MissingCookie(cookie_name.to_string())
    })?;

    decode_payload(&token).map_err(|e| {
        tracing::debug!(cookie = %cookie_name, error = %e, "Session cookie rejected");
        e
    })
}

/// Reads session claims from the configured cookie.
///
/// Expose it to axum handlers via `FromRef`:
/// ```ignore
/// impl FromRef<AppState> for ClaimsReader {
///     fn from_ref(state: &AppState) -> Self {
///         state.claims.clone()
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClaimsReader {
    config: AuthConfig,
}

impl ClaimsReader {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Unverified claims from the session cookie
    pub fn claims<C>(&self, store: &C) -> Result<Claims, ClaimsError>
    where
        C: CookieStore + ?Sized,
    {
        read_claims(store, &self.config.cookie_name)
    }

    /// Session claims from the session cookie, signature and expiry checked
    pub fn verify<C>(&self, store: &C) -> Result<SessionClaims, ClaimsError>
    where
        C: CookieStore + ?Sized,
    {
        let secret = self
            .config
            .jwt_secret
            .as_deref()
            .ok_or(ClaimsError::MissingSecret)?;

        let cookie_name = &self.config.cookie_name;
        let token = store
            .cookie(cookie_name)
            .ok_or_else(|| ClaimsError::MissingCookie(cookie_name.clone()))?;

        verify_session_token(&token, secret)
    }
}
