//! Command-line interface parsing.
//!
//! Every flag that configures the run can also come from the environment,
//! so the binary works unchanged from a cron job or CI step.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::store::DEFAULT_CACHE_FILE;

/// Resolve airline and airport codes to names through a persistent cache
#[derive(Parser, Debug)]
#[command(name = "flight-names")]
#[command(version)]
pub struct Cli {
    /// Path to the JSON cache file
    #[arg(long, env = "NAME_CACHE_PATH", default_value = DEFAULT_CACHE_FILE)]
    pub cache: PathBuf,

    /// Amadeus API key (OAuth2 client ID)
    #[arg(long, env = "AMADEUS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Amadeus API secret (OAuth2 client secret)
    #[arg(long, env = "AMADEUS_API_SECRET", hide_env_values = true)]
    pub api_secret: Option<String>,

    /// Override the Amadeus base URL
    #[arg(long, env = "AMADEUS_BASE_URL")]
    pub base_url: Option<String>,

    /// Never call the reference-data API, even if credentials are set
    #[arg(long)]
    pub offline: bool,

    /// Warm the cache with common codes before running the command
    #[arg(long)]
    pub preload: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// What to do with the cache.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resolve airline carrier codes (e.g. LH, 6H)
    Airline {
        /// Codes to resolve
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Resolve airport IATA codes (e.g. TLV, KEF)
    Airport {
        /// Codes to resolve
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Fill the cache with common codes from the built-in tables
    Preload,
    /// Print cache statistics as JSON
    Stats,
}

/// Normalize a code typed on the command line.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}
