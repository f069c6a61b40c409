use serde::{Deserialize, Serialize};

/// Immutable identity fields carried by the ID token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenIdentity {
    user_id: i64,
    is_guest: bool,
    signature: String,
    stable_id: String,
}

impl TokenIdentity {
    pub fn new(
        user_id: i64,
        is_guest: bool,
        signature: impl Into<String>,
        stable_id: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            is_guest,
            signature: signature.into(),
            stable_id: stable_id.into(),
        }
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn is_guest(&self) -> bool {
        self.is_guest
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Externally stable username, distinct from the numeric id
    pub fn stable_id(&self) -> &str {
        &self.stable_id
    }
}
