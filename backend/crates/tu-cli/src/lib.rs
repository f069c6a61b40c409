pub mod cli;
pub mod commands;
pub mod error;
pub mod json_file;
pub mod logger;
pub mod report;
pub mod user_info_file;

pub use cli::Cli;
pub use commands::{Commands, run};
pub use error::{CliError, Result};
pub use user_info_file::FileUserInfoSource;

#[cfg(test)]
mod tests;
