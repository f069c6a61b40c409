use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tu")]
#[command(about = "Inspect users built from decoded ID-token claims")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level override (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}
