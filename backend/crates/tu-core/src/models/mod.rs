pub mod profile;
pub mod property_flags;
pub mod token_identity;
pub mod user_identity;
pub mod user_properties;
pub mod user_property;
