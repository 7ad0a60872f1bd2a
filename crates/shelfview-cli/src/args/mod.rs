mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shelfview")]
#[command(about = "Search, sort and page a remote product catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: <config dir>/shelfview/config.toml)")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Products endpoint, overrides api.base_url")]
    pub api_url: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Read the catalog from a JSON array file instead of the API"
    )]
    pub from_file: Option<PathBuf>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
