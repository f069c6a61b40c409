//! Claim names read from a decoded ID token.

pub const SUB: &str = "sub";
pub const IS_GUEST: &str = "is_guest";
pub const SIGNATURE: &str = "signature";
pub const PREFERRED_USERNAME: &str = "preferred_username";
pub const EMAIL: &str = "email";
