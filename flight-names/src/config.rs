//! Runtime configuration.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::provider::AmadeusConfig;

/// Errors in the combination of settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Only one half of the API credentials was given
    #[error("both AMADEUS_API_KEY and AMADEUS_API_SECRET must be set (only {present} found)")]
    PartialCredentials { present: &'static str },
}

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the cache document lives.
    pub cache_path: PathBuf,

    /// Reference-data API settings. `None` means no network tier.
    pub amadeus: Option<AmadeusConfig>,

    /// Warm the cache before running the command.
    pub preload: bool,
}

impl AppConfig {
    /// Build the configuration from parsed arguments and environment.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let amadeus = if cli.offline {
            None
        } else {
            match (&cli.api_key, &cli.api_secret) {
                (Some(key), Some(secret)) => {
                    let mut config = AmadeusConfig::new(key, secret);
                    if let Some(url) = &cli.base_url {
                        config = config.with_base_url(url);
                    }
                    Some(config)
                }
                (Some(_), None) => {
                    return Err(ConfigError::PartialCredentials {
                        present: "AMADEUS_API_KEY",
                    });
                }
                (None, Some(_)) => {
                    return Err(ConfigError::PartialCredentials {
                        present: "AMADEUS_API_SECRET",
                    });
                }
                (None, None) => None,
            }
        };

        Ok(Self {
            cache_path: cli.cache.clone(),
            amadeus,
            preload: cli.preload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Command;

    // Built by hand so AMADEUS_* variables in the test environment cannot leak in
    fn cli(api_key: Option<&str>, api_secret: Option<&str>) -> Cli {
        Cli {
            cache: PathBuf::from("names.json"),
            api_key: api_key.map(str::to_string),
            api_secret: api_secret.map(str::to_string),
            base_url: None,
            offline: false,
            preload: false,
            command: Command::Stats,
        }
    }

    #[test]
    fn credentials_enable_provider() {
        let cli = Cli {
            base_url: Some("http://stub".to_string()),
            ..cli(Some("k"), Some("s"))
        };
        let config = AppConfig::from_cli(&cli).unwrap();

        let amadeus = config.amadeus.unwrap();
        assert_eq!(amadeus.api_key, "k");
        assert_eq!(amadeus.base_url, "http://stub");
    }

    #[test]
    fn no_credentials_means_no_provider() {
        let config = AppConfig::from_cli(&cli(None, None)).unwrap();
        assert!(config.amadeus.is_none());
    }

    #[test]
    fn offline_ignores_credentials() {
        let cli = Cli {
            offline: true,
            ..cli(Some("k"), Some("s"))
        };
        let config = AppConfig::from_cli(&cli).unwrap();
        assert!(config.amadeus.is_none());
    }

    #[test]
    fn half_credentials_rejected() {
        assert_eq!(
            AppConfig::from_cli(&cli(Some("k"), None)).unwrap_err(),
            ConfigError::PartialCredentials {
                present: "AMADEUS_API_KEY"
            }
        );
        assert_eq!(
            AppConfig::from_cli(&cli(None, Some("s"))).unwrap_err(),
            ConfigError::PartialCredentials {
                present: "AMADEUS_API_SECRET"
            }
        );

        let offline = Cli {
            offline: true,
            ..cli(Some("k"), None)
        };
        assert!(AppConfig::from_cli(&offline).is_ok());
    }

    #[test]
    fn cache_path_passes_through() {
        let cli = Cli {
            cache: PathBuf::from("data/names.json"),
            preload: true,
            ..cli(None, None)
        };
        let config = AppConfig::from_cli(&cli).unwrap();
        assert_eq!(config.cache_path, PathBuf::from("data/names.json"));
        assert!(config.preload);
    }
}
