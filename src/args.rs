pub mod validation;

use crate::controller::fetcher::{DEFAULT_TIMEOUT_SECS, DEFAULT_UPSTREAM};
use crate::controller::time::DisplayZone;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:5173", "https://react-nba-game.vercel.app"];

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "HOOPS_BIND", value_name = "ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, env = "HOOPS_PORT", value_name = "PORT", default_value_t = 8081)]
    pub port: u16,
    /// Directory for the future/past cache files. Both are emptied on startup.
    #[arg(
        long,
        env = "HOOPS_CACHE_DIR",
        value_name = "DIR",
        default_value = ".",
        value_parser = crate::args::validation::check_cache_dir
    )]
    pub cache_dir: PathBuf,
    /// CORS origin allowed to call the api. Repeat for several.
    #[arg(
        long = "allowed-origin",
        env = "HOOPS_ALLOWED_ORIGINS",
        value_name = "ORIGIN",
        value_delimiter = ',',
        default_values = DEFAULT_ORIGINS,
        value_parser = crate::args::validation::check_origin
    )]
    pub allowed_origins: Vec<String>,
    /// Base url of the schedule site
    #[arg(long, env = "HOOPS_UPSTREAM_URL", value_name = "URL", default_value = DEFAULT_UPSTREAM)]
    pub upstream_url: String,
    /// Give up on the schedule site after this many seconds
    #[arg(long, env = "HOOPS_TIMEOUT_SECS", value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
    /// IANA zone for game start times, or "local" for the server's zone
    #[arg(long, env = "HOOPS_TIMEZONE", value_name = "TZ", default_value = "local")]
    pub timezone: DisplayZone,
}
