use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FETCH_FOR_GUESTS, DEFAULT_MAX_FETCH_ATTEMPTS,
    MAX_MAX_FETCH_ATTEMPTS, MIN_MAX_FETCH_ATTEMPTS,
};

use serde::Deserialize;

/// Lazy profile fetch settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Consecutive failed user-info fetches before giving up on a user
    pub max_fetch_attempts: u32,
    pub fetch_for_guests: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            max_fetch_attempts: DEFAULT_MAX_FETCH_ATTEMPTS,
            fetch_for_guests: DEFAULT_FETCH_FOR_GUESTS,
        }
    }
}

impl ProfileConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_MAX_FETCH_ATTEMPTS..=MAX_MAX_FETCH_ATTEMPTS).contains(&self.max_fetch_attempts) {
            return Err(ConfigError::profile(format!(
                "profile.max_fetch_attempts must be {}-{}, got {}",
                MIN_MAX_FETCH_ATTEMPTS, MAX_MAX_FETCH_ATTEMPTS, self.max_fetch_attempts
            )));
        }

        Ok(())
    }
}
