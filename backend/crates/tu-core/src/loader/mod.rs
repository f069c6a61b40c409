pub mod no_profile_loader;
pub mod profile_loader;
pub mod user_info_loader;
