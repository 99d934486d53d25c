//! Common test utilities and fixtures for integration tests
//!
//! Drives the application router in-process; no listener is bound.

use anyhow::Result;
use axum::{
    body::Body,
    http::{header::COOKIE, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use groupplan_app::{create_router, AppState};
use groupplan_auth::AuthConfig;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

#[allow(dead_code)]
pub const TEST_SECRET: &str = "test_secret_key_for_testing_only"; // pragma: allowlist secret

/// Response captured from the router
#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub set_cookie: Option<String>,
    pub body: Vec<u8>,
}

#[allow(dead_code)]
impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn error_code(&self) -> Option<String> {
        self.json()["error"]["code"].as_str().map(str::to_string)
    }
}

/// In-process application under test
#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub auth_config: AuthConfig,
}

#[allow(dead_code)]
impl TestApp {
    /// App that can verify and issue tokens
    pub fn new() -> Self {
        Self::with_config(AuthConfig::default().with_secret(TEST_SECRET))
    }

    /// App with no signing secret
    pub fn unverified() -> Self {
        Self::with_config(AuthConfig::default())
    }

    /// Development sign-in is mounted
    pub fn with_config(auth_config: AuthConfig) -> Self {
        let router = create_router(AppState::new(auth_config.clone()).with_dev_sign_in(true));
        Self {
            router,
            auth_config,
        }
    }

    pub async fn get(&self, path: &str, cookie_header: Option<&str>) -> Result<TestResponse> {
        let mut builder = Request::get(path);
        if let Some(value) = cookie_header {
            builder = builder.header(COOKIE, value);
        }
        self.send(builder.body(Body::empty())?).await
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Result<TestResponse> {
        let request = Request::post(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))?;
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> Result<TestResponse> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let set_cookie = response
            .headers()
            .get(axum::http::header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.into_body().collect().await?.to_bytes().to_vec();

        Ok(TestResponse {
            status,
            set_cookie,
            body,
        })
    }
}

/// Token whose payload segment is the standard base64 of `payload`
#[allow(dead_code)]
pub fn unsigned_token(payload: &Value) -> String {
    format!(
        "eyJhbGciOiJIUzI1NiJ9.{}.not-a-signature",
        STANDARD.encode(payload.to_string())
    )
}

/// `name=value` pair taken from a `Set-Cookie` header
#[allow(dead_code)]
pub fn cookie_pair(set_cookie: &str) -> &str {
    set_cookie.split(';').next().unwrap_or_default().trim()
}
