use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flight_names::cache::NameCache;
use flight_names::cli::{Cli, Command, normalize_code};
use flight_names::config::AppConfig;
use flight_names::domain::{AirlineCode, AirportCode};
use flight_names::provider::{AmadeusClient, Offline, ReferenceProvider};
use flight_names::store::{NameStore, StoreConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match AppConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut cache = NameCache::open(NameStore::new(StoreConfig::new(&config.cache_path)));
    if config.preload {
        cache.preload_common();
    }

    match config.amadeus {
        Some(amadeus) => match AmadeusClient::new(amadeus) {
            Ok(client) => run(cli.command, &mut cache, &client).await,
            Err(e) => {
                eprintln!("Error: failed to create Amadeus client: {e}");
                ExitCode::FAILURE
            }
        },
        None => run(cli.command, &mut cache, &Offline).await,
    }
}

async fn run<P: ReferenceProvider>(
    command: Command,
    cache: &mut NameCache,
    provider: &P,
) -> ExitCode {
    let mut status = ExitCode::SUCCESS;

    match command {
        Command::Airline { codes } => {
            for raw in codes {
                match AirlineCode::parse(&normalize_code(&raw)) {
                    Ok(code) => {
                        let name = cache.airline_name(&code, provider).await;
                        println!("{}\t{}", code, name);
                    }
                    Err(e) => {
                        eprintln!("{raw}: {e}");
                        status = ExitCode::FAILURE;
                    }
                }
            }
        }
        Command::Airport { codes } => {
            for raw in codes {
                match AirportCode::parse(&normalize_code(&raw)) {
                    Ok(code) => {
                        let name = cache.airport_name(&code, provider).await;
                        println!("{}\t{}", code, name);
                    }
                    Err(e) => {
                        eprintln!("{raw}: {e}");
                        status = ExitCode::FAILURE;
                    }
                }
            }
        }
        Command::Preload => {
            let added = cache.preload_common();
            println!("Preloaded {} entries", added);
        }
        Command::Stats => match serde_json::to_string_pretty(&cache.stats()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                status = ExitCode::FAILURE;
            }
        },
    }

    status
}
