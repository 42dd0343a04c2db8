//! Reference-data providers.
//!
//! A provider is the resolver's network tier: it looks codes up in an
//! external, rate-limited reference-data service. Callers pick one:
//! - [`AmadeusClient`] talks to the Amadeus self-service API
//! - [`MockProvider`] serves canned records for tests and development
//! - [`Offline`] has no network tier at all

mod amadeus;
mod error;
mod mock;
mod types;

use std::future::Future;

pub use amadeus::{AmadeusClient, AmadeusConfig};
pub use error::ProviderError;
pub use mock::MockProvider;
pub use types::{AirlineRecord, AirportRecord, DataResponse};

use crate::domain::{AirlineCode, AirportCode};

/// Source of airline and airport reference data.
pub trait ReferenceProvider {
    /// Look up a carrier by code.
    ///
    /// The first record, if any, is taken as the match.
    fn lookup_airline(
        &self,
        code: &AirlineCode,
    ) -> impl Future<Output = Result<Vec<AirlineRecord>, ProviderError>> + Send;

    /// Search for locations matching an airport code.
    ///
    /// May return several candidates; only one whose `iata_code` equals
    /// `code` is a match.
    fn lookup_airport(
        &self,
        code: &AirportCode,
    ) -> impl Future<Output = Result<Vec<AirportRecord>, ProviderError>> + Send;
}

/// Provider for runs without network access.
///
/// Every lookup reports [`ProviderError::Offline`], which the resolver
/// treats as "no network tier" rather than a failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl ReferenceProvider for Offline {
    async fn lookup_airline(
        &self,
        _code: &AirlineCode,
    ) -> Result<Vec<AirlineRecord>, ProviderError> {
        Err(ProviderError::Offline)
    }

    async fn lookup_airport(
        &self,
        _code: &AirportCode,
    ) -> Result<Vec<AirportRecord>, ProviderError> {
        Err(ProviderError::Offline)
    }
}
