use crate::{CoreResult, ProfileLoader, TokenIdentity, UserInfoPayload};

/// Loader for users whose profile is always set explicitly
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProfileLoader;

impl ProfileLoader for NoProfileLoader {
    fn load_profile(&self, _identity: &TokenIdentity) -> CoreResult<Option<UserInfoPayload>> {
        Ok(None)
    }
}
