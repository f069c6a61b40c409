use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing claim '{claim}' {location}")]
    MissingClaim {
        claim: String,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn missing_claim(claim: &str) -> Self {
        AuthError::MissingClaim {
            claim: claim.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_claim<S: Into<String>>(claim: &str, message: S) -> Self {
        AuthError::InvalidClaim {
            claim: claim.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingClaim { .. } => "MISSING_CLAIM",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
        }
    }

    /// Name of the offending claim
    pub fn claim(&self) -> &str {
        match self {
            Self::MissingClaim { claim, .. } | Self::InvalidClaim { claim, .. } => claim,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
