use crate::{CoreResult, TokenIdentity, UserInfoPayload};

/// Populates a user's profile on demand.
///
/// Called before any read of a mutable profile field until a call succeeds.
/// `Ok(Some(payload))` is applied to the profile, `Ok(None)` leaves it as is;
/// either way the loader is not consulted again for that user. An error
/// leaves the profile unpopulated and the next read calls the loader again.
pub trait ProfileLoader {
    fn load_profile(&self, identity: &TokenIdentity) -> CoreResult<Option<UserInfoPayload>>;
}
