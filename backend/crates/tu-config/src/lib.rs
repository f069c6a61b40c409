mod config;
mod error;
mod log_level;
mod logging_config;
mod profile_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use profile_config::ProfileConfig;

const CONFIG_DIR_ENV: &str = "TU_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".tu";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_MAX_FETCH_ATTEMPTS: u32 = 3;
const MIN_MAX_FETCH_ATTEMPTS: u32 = 1;
const MAX_MAX_FETCH_ATTEMPTS: u32 = 10;
const DEFAULT_FETCH_FOR_GUESTS: bool = false;

#[cfg(test)]
mod tests;
