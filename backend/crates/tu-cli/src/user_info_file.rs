use crate::json_file::read_json_object;

use tu_core::{CoreError, CoreResult, TokenIdentity, UserInfoPayload, UserInfoSource};

use std::path::PathBuf;

use log::debug;

/// User-info source reading a JSON object from disk on each fetch
#[derive(Debug, Clone)]
pub struct FileUserInfoSource {
    path: PathBuf,
}

impl FileUserInfoSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UserInfoSource for FileUserInfoSource {
    fn fetch_user_info(&self, identity: &TokenIdentity) -> CoreResult<UserInfoPayload> {
        debug!(
            "Reading user info for user #{} from {}",
            identity.user_id(),
            self.path.display()
        );
        read_json_object(&self.path)
            .map_err(|e| CoreError::profile_load(identity.user_id(), e.to_string()))
    }
}
