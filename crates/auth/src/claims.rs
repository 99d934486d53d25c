//! Claims types

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ClaimsError;

/// Decoded token payload.
///
/// Holds whatever JSON the payload segment carried, with no schema applied.
/// Built fresh on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Claims(Value);

impl Claims {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Claim value by key; `None` when absent or the payload is not an object
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Interpret the payload as a typed claims struct
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ClaimsError> {
        T::deserialize(&self.0).map_err(|e| ClaimsError::InvalidPayload(e.to_string()))
    }

    /// `exp` claim as a timestamp, if present and numeric
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let exp = self.get("exp")?;
        let secs = exp.as_i64().or_else(|| exp.as_f64().map(|f| f as i64))?;
        DateTime::from_timestamp(secs, 0)
    }
}

impl From<Claims> for Value {
    fn from(claims: Claims) -> Self {
        claims.0
    }
}

impl PartialEq<Value> for Claims {
    fn eq(&self, other: &Value) -> bool {
        &self.0 == other
    }
}

/// Claims carried by a GroupPlan session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(default)]
    pub email: String,
    /// Avatar URL
    #[serde(default)]
    pub pfp: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Expires at (unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl SessionClaims {
    /// A token without `exp` never expires
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp.is_some_and(|exp| now.timestamp() > exp)
    }
}

impl TryFrom<&Claims> for SessionClaims {
    type Error = ClaimsError;

    fn try_from(claims: &Claims) -> Result<Self, Self::Error> {
        claims.deserialize()
    }
}
