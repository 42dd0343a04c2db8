//! Mock provider for testing without API access.
//!
//! Serves canned records from memory as if they were live API responses,
//! and counts how often it is asked.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::domain::{AirlineCode, AirportCode};

use super::ReferenceProvider;
use super::error::ProviderError;
use super::types::{AirlineRecord, AirportRecord};

/// Canned records, keyed by the code or keyword asked about.
#[derive(Debug, Default)]
struct MockData {
    airlines: HashMap<String, Vec<AirlineRecord>>,
    airports: HashMap<String, Vec<AirportRecord>>,
}

/// Mock provider that serves records from memory.
///
/// Unknown codes return an empty result, like the real API does.
#[derive(Debug, Default)]
pub struct MockProvider {
    data: MockData,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl MockProvider {
    /// Create an empty mock provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a carrier record for `code`. Repeated calls append, in order.
    pub fn with_airline(mut self, code: &str, name: &str) -> Self {
        self.data
            .airlines
            .entry(code.to_string())
            .or_default()
            .push(AirlineRecord::new(code, name));
        self
    }

    /// Serve exactly these carrier records for `code`, in order.
    pub fn with_airline_records(mut self, code: &str, records: Vec<AirlineRecord>) -> Self {
        self.data.airlines.insert(code.to_string(), records);
        self
    }

    /// Serve these location records for a search on `keyword`.
    pub fn with_airport_results(mut self, keyword: &str, records: Vec<AirportRecord>) -> Self {
        self.data.airports.insert(keyword.to_string(), records);
        self
    }

    /// Serve a single exact-match airport record for `code`.
    pub fn with_airport(self, code: &str, name: &str) -> Self {
        self.with_airport_results(code, vec![AirportRecord::new(code, name)])
    }

    /// Make every subsequent lookup fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of lookups made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ProviderError::Api {
                status: 503,
                message: "mock provider unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl ReferenceProvider for MockProvider {
    async fn lookup_airline(
        &self,
        code: &AirlineCode,
    ) -> Result<Vec<AirlineRecord>, ProviderError> {
        self.check()?;
        Ok(self
            .data
            .airlines
            .get(code.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn lookup_airport(
        &self,
        code: &AirportCode,
    ) -> Result<Vec<AirportRecord>, ProviderError> {
        self.check()?;
        Ok(self
            .data
            .airports
            .get(code.as_str())
            .cloned()
            .unwrap_or_default())
    }
}
