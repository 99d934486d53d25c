//! GroupPlan session claims service composition root
//!
//! Wires the claims reader and token issuer into a router.

use axum::{
    extract::{FromRef, State},
    http::{header::SET_COOKIE, StatusCode},
    routing::{get, post},
    Json, Router,
};
use groupplan_auth::{
    AuthConfig, Claims, ClaimsReader, CookieClaims, SessionClaims, TokenIssuer, VerifiedSession,
};
use groupplan_common::{config::Config, Error, Result};
use serde::Deserialize;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub claims: ClaimsReader,
    pub issuer: TokenIssuer,
    /// Whether `POST /auth/dev/session` is mounted
    pub dev_sign_in: bool,
}

impl AppState {
    pub fn new(auth_config: AuthConfig) -> Self {
        Self {
            claims: ClaimsReader::new(auth_config.clone()),
            issuer: TokenIssuer::new(auth_config),
            dev_sign_in: false,
        }
    }

    pub fn with_dev_sign_in(mut self, enabled: bool) -> Self {
        self.dev_sign_in = enabled;
        self
    }
}

impl FromRef<AppState> for ClaimsReader {
    fn from_ref(state: &AppState) -> Self {
        state.claims.clone()
    }
}

/// Create the main application router
pub fn create_app(config: &Config) -> Router {
    create_router(AppState::new(AuthConfig::from(config)).with_dev_sign_in(config.dev_sign_in))
}

pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .route(
            "/",
            get(|| async { "GroupPlan claims service v0.0.1-SNAPSHOT" }),
        )
        .route("/auth/claims", get(read_cookie_claims))
        .route("/auth/session", get(read_session));

    if state.dev_sign_in {
        router = router.route("/auth/dev/session", post(create_dev_session));
    }

    router.with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Unverified claims of the session cookie
async fn read_cookie_claims(CookieClaims(claims): CookieClaims) -> Json<Claims> {
    Json(claims)
}

/// Verified session claims
async fn read_session(VerifiedSession(session): VerifiedSession) -> Json<SessionClaims> {
    Json(session)
}

/// Request to sign in without an identity provider
#[derive(Debug, Deserialize)]
pub struct DevSessionRequest {
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pfp: String,
}

/// Issue a session cookie for local development
async fn create_dev_session(
    State(state): State<AppState>,
    Json(req): Json<DevSessionRequest>,
) -> Result<(StatusCode, [(axum::http::HeaderName, String); 1])> {
    if req.email.trim().is_empty() {
        return Err(Error::Validation("email is required".to_string()));
    }

    let token = state.issuer.issue(&req.email, &req.pfp, &req.name)?;
    tracing::info!(email = %req.email, "Development session issued");

    Ok((
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, state.issuer.session_cookie(&token))],
    ))
}
