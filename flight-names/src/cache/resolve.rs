//! Tiered resolution of codes to names.

use tracing::debug;

use crate::domain::{AirlineCode, AirportCode};
use crate::fallback;
use crate::provider::{AirlineRecord, ProviderError, ReferenceProvider};

use super::NameCache;

/// Why the provider tier produced no name.
#[derive(Debug)]
enum ProviderMiss {
    /// No provider for this run.
    Unavailable,
    /// The provider answered, but had no usable record.
    NotFound,
    /// The provider call failed.
    Failed(ProviderError),
}

impl From<ProviderError> for ProviderMiss {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Offline => ProviderMiss::Unavailable,
            e => ProviderMiss::Failed(e),
        }
    }
}

impl NameCache {
    /// Resolve a carrier code to a display name.
    ///
    /// Tries the cache, then `provider`, then the static table. Never
    /// fails: a code nobody knows gets a placeholder containing the code,
    /// which is not cached.
    pub async fn airline_name<P: ReferenceProvider>(
        &mut self,
        code: &AirlineCode,
        provider: &P,
    ) -> String {
        if let Some(name) = self.document.airline(code) {
            debug!(code = %code, "airline found in cache");
            return name.to_string();
        }

        match airline_from_provider(provider, code).await {
            Ok(name) => {
                self.remember_airline(code, &name);
                return name;
            }
            Err(miss) => log_miss("airline", code.as_str(), &miss),
        }

        match fallback::airline_name(code) {
            Some(name) => {
                self.remember_airline(code, name);
                name.to_string()
            }
            None => fallback::unknown_airline(code),
        }
    }

    /// Resolve an airport code to a display name.
    ///
    /// Same tiers as [`NameCache::airline_name`]. The provider's keyword
    /// search may return nearby locations too, so only a record whose own
    /// code matches exactly is accepted.
    pub async fn airport_name<P: ReferenceProvider>(
        &mut self,
        code: &AirportCode,
        provider: &P,
    ) -> String {
        if let Some(name) = self.document.airport(code) {
            debug!(code = %code, "airport found in cache");
            return name.to_string();
        }

        match airport_from_provider(provider, code).await {
            Ok(name) => {
                self.remember_airport(code, &name);
                return name;
            }
            Err(miss) => log_miss("airport", code.as_str(), &miss),
        }

        match fallback::airport_name(code) {
            Some(name) => {
                self.remember_airport(code, name);
                name.to_string()
            }
            None => fallback::unknown_airport(code),
        }
    }

    fn remember_airline(&mut self, code: &AirlineCode, name: &str) {
        if self.document.insert_airline(code, name) {
            debug!(code = %code, name, "cached airline");
            self.modified = true;
            self.persist();
        }
    }

    fn remember_airport(&mut self, code: &AirportCode, name: &str) {
        if self.document.insert_airport(code, name) {
            debug!(code = %code, name, "cached airport");
            self.modified = true;
            self.persist();
        }
    }
}

async fn airline_from_provider<P: ReferenceProvider>(
    provider: &P,
    code: &AirlineCode,
) -> Result<String, ProviderMiss> {
    let records = provider.lookup_airline(code).await?;

    records
        .first()
        .and_then(AirlineRecord::display_name)
        .map(str::to_string)
        .ok_or(ProviderMiss::NotFound)
}

async fn airport_from_provider<P: ReferenceProvider>(
    provider: &P,
    code: &AirportCode,
) -> Result<String, ProviderMiss> {
    let records = provider.lookup_airport(code).await?;

    records
        .into_iter()
        .find(|r| r.iata_code == code.as_str())
        .map(|r| r.name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or(ProviderMiss::NotFound)
}

fn log_miss(kind: &'static str, code: &str, miss: &ProviderMiss) {
    match miss {
        ProviderMiss::Unavailable => {}
        ProviderMiss::NotFound => debug!(kind, code, "provider has no matching record"),
        ProviderMiss::Failed(e) => debug!(kind, code, error = %e, "provider lookup failed"),
    }
}
