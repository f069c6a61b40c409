pub mod error;
pub mod loader;
pub mod models;
pub mod payload;

pub use error::{CoreError, CoreResult};
pub use loader::no_profile_loader::NoProfileLoader;
pub use loader::profile_loader::ProfileLoader;
pub use loader::user_info_loader::{UserInfoLoader, UserInfoLoaderSettings, UserInfoSource};
pub use models::profile::Profile;
pub use models::property_flags::PropertyFlags;
pub use models::token_identity::TokenIdentity;
pub use models::user_identity::{GUEST_DISPLAY_NAME, UserIdentity};
pub use models::user_properties::{user_properties, user_property, user_property_map};
pub use models::user_property::{PropertyGetter, PropertySetter, UserProperty};
pub use payload::{UserInfoPayload, payload_value};

#[cfg(test)]
mod tests;
