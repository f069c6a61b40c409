use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] tu_config::ConfigError),

    #[error("Claim error: {0}")]
    Auth(#[from] tu_auth::AuthError),

    #[error("Profile error: {0}")]
    Core(#[from] tu_core::CoreError),

    #[error("Failed to read {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("JSON parse error in {path}: {source} {location}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Expected a JSON object in {path} {location}")]
    NotAnObject {
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CliError {
    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        CliError::Io {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn json(path: PathBuf, source: serde_json::Error) -> Self {
        CliError::Json {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_an_object(path: PathBuf) -> Self {
        CliError::NotAnObject {
            path,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
