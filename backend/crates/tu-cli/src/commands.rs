use crate::json_file::read_json_object;
use crate::report::{render_properties, render_user};
use crate::{CliError, FileUserInfoSource, Result as CliResult};

use tu_config::Config;
use tu_core::{UserIdentity, UserInfoLoader, UserInfoLoaderSettings};

use std::path::{Path, PathBuf};

use clap::Subcommand;
use log::info;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a user from decoded claims and print its profile
    Show {
        /// JSON file with the decoded ID-token claim set
        #[arg(long)]
        claims: PathBuf,

        /// JSON file with profile properties keyed by serialization key
        #[arg(long)]
        profile: Option<PathBuf>,

        /// JSON user-info file fetched lazily on first profile read
        #[arg(long)]
        user_info: Option<PathBuf>,
    },

    /// List the profile property table
    Properties,

    /// Apply a profile payload and print it re-serialized
    Payload {
        #[arg(long)]
        claims: PathBuf,

        #[arg(long)]
        profile: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Execute a command, returning the text to print
pub fn run(command: Commands, config: &Config) -> CliResult<String> {
    match command {
        Commands::Show {
            claims,
            profile,
            user_info,
        } => {
            let mut user = load_user(&claims, profile.as_deref())?;
            if let Some(path) = user_info {
                let settings = UserInfoLoaderSettings {
                    max_attempts: config.profile.max_fetch_attempts,
                    fetch_for_guests: config.profile.fetch_for_guests,
                };
                let loader = UserInfoLoader::new(FileUserInfoSource::new(path), settings);
                user = user.with_loader(loader);
                user.ensure_profile_populated()?;
            }
            Ok(render_user(&user))
        }
        Commands::Properties => Ok(render_properties()),
        Commands::Payload {
            claims,
            profile,
            pretty,
        } => {
            let user = load_user(&claims, Some(&profile))?;
            let payload = serde_json::Value::Object(user.to_payload());
            let text = if pretty {
                serde_json::to_string_pretty(&payload)
            } else {
                serde_json::to_string(&payload)
            };
            text.map_err(|e| CliError::json(profile, e))
        }
    }
}

fn load_user(claims_path: &Path, profile_path: Option<&Path>) -> CliResult<UserIdentity> {
    let claims = read_json_object(claims_path)?;
    let mut user = tu_auth::user_from_claim_set(&claims)?;
    info!("Loaded user #{} from {}", user.user_id(), claims_path.display());

    if let Some(path) = profile_path {
        user.set_property_values(&read_json_object(path)?);
        info!("Applied profile properties from {}", path.display());
    }

    Ok(user)
}
