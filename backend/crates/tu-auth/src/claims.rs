use crate::claim_names::{EMAIL, IS_GUEST, PREFERRED_USERNAME, SIGNATURE, SUB};
use crate::{AuthError, Result as AuthErrorResult};

use tu_core::UserIdentity;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity claims of a decoded (already verified) ID token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdTokenClaims {
    /// Subject: the numeric user id, as a string
    pub sub: String,
    pub is_guest: bool,
    pub signature: String,
    /// Stable external username
    pub preferred_username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl IdTokenClaims {
    /// Extract and validate the identity claims from a decoded claim set.
    ///
    /// Fails on the first missing or mistyped required claim, naming it.
    #[track_caller]
    pub fn from_claim_set(claims: &Map<String, Value>) -> AuthErrorResult<Self> {
        let parsed = Self {
            sub: required_str(claims, SUB)?,
            is_guest: required_bool(claims, IS_GUEST)?,
            signature: required_str(claims, SIGNATURE)?,
            preferred_username: required_str(claims, PREFERRED_USERNAME)?,
            email: optional_str(claims, EMAIL)?,
        };
        parsed.validate()?;

        Ok(parsed)
    }

    /// Validate claim contents after extraction
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        self.user_id()?;

        if self.signature.is_empty() {
            return Err(AuthError::invalid_claim(SIGNATURE, "signature cannot be empty"));
        }

        if self.preferred_username.is_empty() {
            return Err(AuthError::invalid_claim(
                PREFERRED_USERNAME,
                "preferred_username cannot be empty",
            ));
        }

        Ok(())
    }

    /// Subject parsed as the numeric user id
    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<i64> {
        self.sub.parse::<i64>().map_err(|_| {
            AuthError::invalid_claim(SUB, format!("'{}' is not a numeric user id", self.sub))
        })
    }
}

impl TryFrom<IdTokenClaims> for UserIdentity {
    type Error = AuthError;

    #[track_caller]
    fn try_from(claims: IdTokenClaims) -> AuthErrorResult<Self> {
        claims.validate()?;
        let user_id = claims.user_id()?;

        let mut user = UserIdentity::new(
            user_id,
            claims.is_guest,
            claims.signature,
            claims.preferred_username,
        );
        user.set_email(claims.email);

        Ok(user)
    }
}

/// Build a user straight from a decoded claim set
#[track_caller]
pub fn user_from_claim_set(claims: &Map<String, Value>) -> AuthErrorResult<UserIdentity> {
    UserIdentity::try_from(IdTokenClaims::from_claim_set(claims)?)
}

#[track_caller]
fn required_str(claims: &Map<String, Value>, name: &str) -> AuthErrorResult<String> {
    match claims.get(name) {
        None | Some(Value::Null) => Err(AuthError::missing_claim(name)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(AuthError::invalid_claim(
            name,
            format!("expected string, got {}", json_type(other)),
        )),
    }
}

#[track_caller]
fn required_bool(claims: &Map<String, Value>, name: &str) -> AuthErrorResult<bool> {
    match claims.get(name) {
        None | Some(Value::Null) => Err(AuthError::missing_claim(name)),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(AuthError::invalid_claim(
            name,
            format!("expected boolean, got {}", json_type(other)),
        )),
    }
}

#[track_caller]
fn optional_str(claims: &Map<String, Value>, name: &str) -> AuthErrorResult<Option<String>> {
    match claims.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(AuthError::invalid_claim(
            name,
            format!("expected string, got {}", json_type(other)),
        )),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
