//! Session cookie configuration

use groupplan_common::config::{Config, DEFAULT_COOKIE_NAME, DEFAULT_TOKEN_TTL_SECONDS};

/// Session cookie configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Cookie the session token is stored under
    pub cookie_name: String,
    /// HMAC secret shared with the issuer; `None` disables verification
    pub jwt_secret: Option<String>,
    /// Domain attribute for issued cookies
    pub cookie_domain: Option<String>,
    pub token_ttl_seconds: u64,
}

impl AuthConfig {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            jwt_secret: None,
            cookie_domain: None,
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
        }
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.cookie_domain = Some(domain.into());
        self
    }

    pub fn with_ttl_seconds(mut self, ttl: u64) -> Self {
        self.token_ttl_seconds = ttl;
        self
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COOKIE_NAME)
    }
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        Self {
            cookie_name: config.auth_cookie_name.clone(),
            jwt_secret: config.jwt_secret.clone(),
            cookie_domain: config.cookie_domain.clone(),
            token_ttl_seconds: config.jwt_ttl_seconds,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    #[mutants::skip] // Diagnostic output only
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("cookie_name", &self.cookie_name)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[redacted]"))
            .field("cookie_domain", &self.cookie_domain)
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .finish()
    }
}
