//! Token payload decoding and HMAC verification

use base64::{
    alphabet,
    engine::{general_purpose::GeneralPurpose, DecodePaddingMode, GeneralPurposeConfig},
    Engine,
};
use std::collections::HashSet;

use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};

use crate::claims::{Claims, SessionClaims};
use crate::error::ClaimsError;

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// JWT segments are unpadded base64url
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Hand-built tokens often use padded standard base64
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Decode the claims of a token without checking its signature.
///
/// Takes the second dot-separated segment, base64-decodes it (either
/// alphabet, padding optional) and parses the bytes as JSON.
pub fn decode_payload(token: &str) -> Result<Claims, ClaimsError> {
    let payload = token.split('.').nth(1).ok_or(ClaimsError::MalformedToken)?;

    let bytes = URL_SAFE_LENIENT
        .decode(payload)
        .or_else(|_| STANDARD_LENIENT.decode(payload))
        .map_err(|e| ClaimsError::InvalidEncoding(e.to_string()))?;

    let value = serde_json::from_slice(&bytes)
        .map_err(|e| ClaimsError::InvalidPayload(e.to_string()))?;

    Ok(Claims::new(value))
}

/// Verify an HMAC-signed session token and return its typed claims.
///
/// Structural problems are reported the same way `decode_payload` reports
/// them. `exp` is optional but enforced without leeway when present, so a
/// token is rejected exactly when `SessionClaims::is_expired_at` says so.
pub fn verify_session_token(token: &str, secret: &str) -> Result<SessionClaims, ClaimsError> {
    decode_payload(token)?;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
    validation.required_spec_claims = HashSet::new();
    validation.leeway = 0;
    validation.validate_aud = false;

    let decoding_key = DecodingKey::from_secret(secret.as_ref());

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        match e.kind() {
            ErrorKind::ExpiredSignature => ClaimsError::Expired,
            ErrorKind::InvalidToken => ClaimsError::MalformedToken,
            ErrorKind::Base64(_) => ClaimsError::InvalidEncoding(e.to_string()),
            ErrorKind::Json(_) | ErrorKind::Utf8(_) | ErrorKind::MissingRequiredClaim(_) => {
                ClaimsError::InvalidPayload(e.to_string())
            }
            _ => ClaimsError::InvalidSignature,
        }
    })?;

    Ok(token_data.claims)
}
