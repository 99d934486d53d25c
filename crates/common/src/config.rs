//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Cookie the issuing service stores the session token under
pub const DEFAULT_COOKIE_NAME: &str = "groupplan_jwt";

/// Session lifetime used by the issuing service (24 hours)
pub const DEFAULT_TOKEN_TTL_SECONDS: u64 = 3600 * 24;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name of the cookie carrying the session token
    pub auth_cookie_name: String,

    /// HMAC secret for verifying and issuing tokens. Verification is
    /// unavailable when unset.
    pub jwt_secret: Option<String>,

    /// Domain attribute for issued cookies
    pub cookie_domain: Option<String>,

    /// Lifetime of issued tokens and their cookies
    pub jwt_ttl_seconds: u64,

    /// Mount the development sign-in endpoint. Off unless `DEV_SIGN_IN=true`.
    pub dev_sign_in: bool,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let auth_cookie_name =
            env::var("AUTH_COOKIE_NAME").unwrap_or_else(|_| DEFAULT_COOKIE_NAME.to_string());
        if auth_cookie_name.trim().is_empty() {
            anyhow::bail!("AUTH_COOKIE_NAME must not be empty");
        }

        let jwt_ttl_seconds = match env::var("JWT_TTL_SECONDS") {
            Ok(raw) => {
                let ttl: u64 = raw
                    .parse()
                    .map_err(|e| anyhow::anyhow!("JWT_TTL_SECONDS is not a number: {}", e))?;
                if ttl == 0 {
                    anyhow::bail!("JWT_TTL_SECONDS must be positive");
                }
                ttl
            }
            Err(_) => DEFAULT_TOKEN_TTL_SECONDS,
        };

        let config = Self {
            auth_cookie_name,
            jwt_secret: env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()),
            cookie_domain: env::var("COOKIE_DOMAIN").ok().filter(|s| !s.is_empty()),
            jwt_ttl_seconds,
            dev_sign_in: env::var("DEV_SIGN_IN")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1"))
                .unwrap_or(false),

            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "groupplan=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}

impl std::fmt::Debug for Config {
    #[mutants::skip] // Diagnostic output only
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("auth_cookie_name", &self.auth_cookie_name)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[redacted]"))
            .field("cookie_domain", &self.cookie_domain)
            .field("jwt_ttl_seconds", &self.jwt_ttl_seconds)
            .field("dev_sign_in", &self.dev_sign_in)
            .field("rust_log", &self.rust_log)
            .field("port", &self.port)
            .finish()
    }
}
