//! Claims errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failure to produce claims from a session cookie
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimsError {
    /// No cookie with the requested name
    #[error("cookie `{0}` is not present")]
    MissingCookie(String),
    /// Fewer than two dot-separated segments
    #[error("token does not have a payload segment")]
    MalformedToken,
    /// Payload segment is not base64
    #[error("token payload is not valid base64: {0}")]
    InvalidEncoding(String),
    /// Decoded payload is not JSON (or not the expected shape)
    #[error("token payload is not valid JSON: {0}")]
    InvalidPayload(String),
    /// Signature check failed
    #[error("token signature is invalid")]
    InvalidSignature,
    /// Token `exp` is in the past
    #[error("token has expired")]
    Expired,
    /// No HMAC secret configured, so tokens can be neither verified nor issued
    #[error("no token secret is configured")]
    MissingSecret,
    /// Signing a new token failed
    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl ClaimsError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ClaimsError::MissingCookie(_) | ClaimsError::InvalidSignature | ClaimsError::Expired => {
                StatusCode::UNAUTHORIZED
            }
            ClaimsError::MalformedToken
            | ClaimsError::InvalidEncoding(_)
            | ClaimsError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ClaimsError::MissingSecret | ClaimsError::Signing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ClaimsError::MissingCookie(_) => "MISSING_SESSION_COOKIE",
            ClaimsError::MalformedToken => "MALFORMED_TOKEN",
            ClaimsError::InvalidEncoding(_) => "INVALID_TOKEN_ENCODING",
            ClaimsError::InvalidPayload(_) => "INVALID_TOKEN_PAYLOAD",
            ClaimsError::InvalidSignature => "INVALID_TOKEN",
            ClaimsError::Expired => "TOKEN_EXPIRED",
            ClaimsError::MissingSecret => "VERIFICATION_UNAVAILABLE",
            ClaimsError::Signing(_) => "TOKEN_SIGNING_FAILED",
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            ClaimsError::MissingCookie(_) => "Session cookie required",
            ClaimsError::MalformedToken => "Session token is malformed",
            ClaimsError::InvalidEncoding(_) => "Session token payload is not valid base64",
            ClaimsError::InvalidPayload(_) => "Session token payload is not valid JSON",
            ClaimsError::InvalidSignature => "Invalid session token",
            ClaimsError::Expired => "Session token has expired",
            ClaimsError::MissingSecret => "Session verification is not configured",
            ClaimsError::Signing(_) => "Failed to issue session token",
        }
    }
}

impl IntoResponse for ClaimsError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Session claims failure");
        }

        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.public_message(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<ClaimsError> for groupplan_common::Error {
    fn from(err: ClaimsError) -> Self {
        let status = err.status_code();
        if status == StatusCode::UNAUTHORIZED {
            Self::Authentication(err.to_string())
        } else if status == StatusCode::BAD_REQUEST {
            Self::Validation(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}
