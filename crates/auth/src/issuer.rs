//! Session token issuing
//!
//! Mirrors what the sign-in callback hands the client: an HS256 token with
//! the user's email, avatar and display name, stored in a cookie the page
//! script can read.

use chrono::{DateTime, Duration, Utc};
use cookie::Cookie;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::error::ClaimsError;

/// Signs session tokens and renders their cookies
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    config: AuthConfig,
}

impl TokenIssuer {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Sign a token for a user, expiring `token_ttl_seconds` from now
    pub fn issue(
        &self,
        email: &str,
        avatar_url: &str,
        display_name: &str,
    ) -> Result<String, ClaimsError> {
        self.issue_at(email, avatar_url, display_name, Utc::now())
    }

    pub fn issue_at(
        &self,
        email: &str,
        avatar_url: &str,
        display_name: &str,
        now: DateTime<Utc>,
    ) -> Result<String, ClaimsError> {
        let ttl = i64::try_from(self.config.token_ttl_seconds).unwrap_or(i64::MAX);
        let expires = Duration::try_seconds(ttl)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let claims = SessionClaims {
            email: email.to_string(),
            pfp: avatar_url.to_string(),
            name: display_name.to_string(),
            exp: Some(expires.timestamp()),
        };

        self.sign(&claims)
    }

    /// Sign arbitrary session claims as-is
    pub fn sign(&self, claims: &SessionClaims) -> Result<String, ClaimsError> {
        let secret = self
            .config
            .jwt_secret
            .as_deref()
            .ok_or(ClaimsError::MissingSecret)?;

        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .map_err(|e| {
            tracing::error!(error = %e, "Failed signing JWT");
            ClaimsError::Signing(e.to_string())
        })
    }

    /// `Set-Cookie` header value carrying `token`, percent-encoded.
    ///
    /// Secure but not HttpOnly: the client reads the claims itself.
    pub fn session_cookie(&self, token: &str) -> String {
        let max_age = i64::try_from(self.config.token_ttl_seconds).unwrap_or(i64::MAX);

        let mut builder = Cookie::build((self.config.cookie_name.clone(), token.to_string()))
            .max_age(cookie::time::Duration::seconds(max_age))
            .path("/")
            .secure(true);
        if let Some(domain) = &self.config.cookie_domain {
            builder = builder.domain(domain.clone());
        }

        builder.build().encoded().to_string()
    }
}
