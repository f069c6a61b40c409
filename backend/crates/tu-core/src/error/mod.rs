use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Profile load failed for user #{user_id}: {message} {location}")]
    ProfileLoad {
        user_id: i64,
        message: String,
        location: ErrorLocation,
    },

    #[error("Profile unavailable for user #{user_id} after {attempts} failed attempts {location}")]
    ProfileUnavailable {
        user_id: i64,
        attempts: u32,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a profile load error
    #[track_caller]
    pub fn profile_load<S: Into<String>>(user_id: i64, message: S) -> Self {
        CoreError::ProfileLoad {
            user_id,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a profile unavailable error
    #[track_caller]
    pub fn profile_unavailable(user_id: i64, attempts: u32) -> Self {
        CoreError::ProfileUnavailable {
            user_id,
            attempts,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CoreResult<T> = StdResult<T, CoreError>;
