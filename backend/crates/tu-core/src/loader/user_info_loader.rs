use crate::{CoreError, CoreResult, ProfileLoader, TokenIdentity, UserInfoPayload};

use std::cell::Cell;

use log::{debug, warn};

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_FETCH_FOR_GUESTS: bool = false;

/// Retrieves the full user-info payload for an identity (e.g. a remote
/// user-info endpoint authenticated with the token signature).
pub trait UserInfoSource {
    fn fetch_user_info(&self, identity: &TokenIdentity) -> CoreResult<UserInfoPayload>;
}

impl<F> UserInfoSource for F
where
    F: Fn(&TokenIdentity) -> CoreResult<UserInfoPayload>,
{
    fn fetch_user_info(&self, identity: &TokenIdentity) -> CoreResult<UserInfoPayload> {
        self(identity)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UserInfoLoaderSettings {
    /// Consecutive failed fetches before the source is no longer called
    pub max_attempts: u32,
    /// Guests normally have no stored profile
    pub fetch_for_guests: bool,
}

impl Default for UserInfoLoaderSettings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            fetch_for_guests: DEFAULT_FETCH_FOR_GUESTS,
        }
    }
}

/// Profile loader backed by a [`UserInfoSource`]
pub struct UserInfoLoader<S> {
    source: S,
    settings: UserInfoLoaderSettings,
    failed_attempts: Cell<u32>,
}

impl<S: UserInfoSource> UserInfoLoader<S> {
    pub fn new(source: S, settings: UserInfoLoaderSettings) -> Self {
        Self {
            source,
            settings,
            failed_attempts: Cell::new(0),
        }
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts.get()
    }
}

impl<S: UserInfoSource> ProfileLoader for UserInfoLoader<S> {
    fn load_profile(&self, identity: &TokenIdentity) -> CoreResult<Option<UserInfoPayload>> {
        if identity.is_guest() && !self.settings.fetch_for_guests {
            debug!("Skipping user-info fetch for guest #{}", identity.user_id());
            return Ok(None);
        }

        let failed = self.failed_attempts.get();
        if failed >= self.settings.max_attempts {
            return Err(CoreError::profile_unavailable(identity.user_id(), failed));
        }

        match self.source.fetch_user_info(identity) {
            Ok(payload) => {
                debug!("Fetched user info for user #{}", identity.user_id());
                self.failed_attempts.set(0);
                Ok(Some(payload))
            }
            Err(e) => {
                self.failed_attempts.set(failed + 1);
                warn!(
                    "User-info fetch {}/{} failed for user #{}: {}",
                    failed + 1,
                    self.settings.max_attempts,
                    identity.user_id(),
                    e
                );
                Err(e)
            }
        }
    }
}
