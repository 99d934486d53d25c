//! Unverified claims reading through `GET /auth/claims`

use axum::http::StatusCode;
use groupplan_auth::{read_claims, AuthConfig, ClaimsError, CookieJar};
use serde_json::json;

use crate::common::{unsigned_token, TestApp};

mod common;

#[test_log::test(tokio::test)]
async fn test_claims_returned_as_json() {
    let app = TestApp::unverified();
    let token = unsigned_token(&json!({"sub": "abc", "exp": 123}));

    let response = app
        .get("/auth/claims", Some(&format!("groupplan_jwt={}", token)))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"sub": "abc", "exp": 123}));
}

#[tokio::test]
async fn test_other_cookies_are_ignored() {
    let app = TestApp::unverified();
    let token = unsigned_token(&json!({"name": "Ada"}));

    let response = app
        .get(
            "/auth/claims",
            Some(&format!("theme=dark; groupplan_jwt={}; lang=en", token)),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["name"], "Ada");
}

#[tokio::test]
async fn test_missing_cookie_is_unauthorized() {
    let app = TestApp::unverified();

    let response = app.get("/auth/claims", Some("theme=dark")).await.unwrap();
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.error_code().as_deref(),
        Some("MISSING_SESSION_COOKIE")
    );

    let response = app.get("/auth/claims", None).await.unwrap();
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_token_is_bad_request() {
    let app = TestApp::unverified();

    let response = app
        .get("/auth/claims", Some("groupplan_jwt=nodots"))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code().as_deref(), Some("MALFORMED_TOKEN"));
}

#[tokio::test]
async fn test_invalid_encoding_is_bad_request() {
    let app = TestApp::unverified();

    let response = app
        .get("/auth/claims", Some("groupplan_jwt=h.ab!c.s"))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.error_code().as_deref(),
        Some("INVALID_TOKEN_ENCODING")
    );
}

#[tokio::test]
async fn test_invalid_payload_is_bad_request() {
    let app = TestApp::unverified();

    let response = app
        .get("/auth/claims", Some("groupplan_jwt=h.bm90anNvbg==.s"))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.error_code().as_deref(),
        Some("INVALID_TOKEN_PAYLOAD")
    );
}

#[tokio::test]
async fn test_custom_cookie_name() {
    let app = TestApp::with_config(AuthConfig::new("sid"));
    let token = unsigned_token(&json!({"sub": "abc"}));

    let response = app
        .get("/auth/claims", Some(&format!("groupplan_jwt={}", token)))
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .get("/auth/claims", Some(&format!("sid={}", token)))
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::OK);
}

#[test]
fn test_read_claims_from_raw_cookie_header() {
    let token = unsigned_token(&json!({"email": "ada@example.com", "groups": [1, 2]}));
    let jar = CookieJar::parse(&format!("groupplan_jwt=\"{}\"", token));

    let claims = read_claims(&jar, "groupplan_jwt").unwrap();
    assert_eq!(claims, json!({"email": "ada@example.com", "groups": [1, 2]}));

    assert_eq!(
        read_claims(&jar, "other"),
        Err(ClaimsError::MissingCookie("other".to_string()))
    );
}

#[tokio::test]
async fn test_query_escaped_cookie_is_decoded() {
    let app = TestApp::unverified();

    let response = app
        .get(
            "/auth/claims",
            Some("groupplan_jwt=h.eyJzdWIiOiJhYmMiLCJleHAiOjEyM30%3D.s"),
        )
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"sub": "abc", "exp": 123}));

    let response = app
        .get("/auth/claims", Some("groupplan_jwt=h.bm90anNvbg%3D%3D.s"))
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.error_code().as_deref(),
        Some("INVALID_TOKEN_PAYLOAD")
    );
}
