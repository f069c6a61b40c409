pub mod claim_names;
pub mod claims;
pub mod error;

pub use claims::{IdTokenClaims, user_from_claim_set};
pub use error::{AuthError, Result};

#[cfg(test)]
mod tests;
