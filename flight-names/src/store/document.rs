//! The persisted cache document.

use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{AirlineCode, AirportCode};

/// Format tag written on every save.
pub const FORMAT_VERSION: &str = "1.0";

/// Full cache state as stored on disk.
///
/// Unknown top-level fields are carried through load and save untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheDocument {
    airlines: BTreeMap<String, String>,
    airports: BTreeMap<String, String>,
    #[serde(default = "Utc::now", deserialize_with = "lenient_timestamp")]
    last_updated: DateTime<Utc>,
    #[serde(default)]
    version: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl CacheDocument {
    /// An empty document stamped with the current time and format version.
    pub fn new() -> Self {
        Self {
            airlines: BTreeMap::new(),
            airports: BTreeMap::new(),
            last_updated: Utc::now(),
            version: FORMAT_VERSION.to_string(),
            extra: Map::new(),
        }
    }

    /// Cached airline name. Empty names read from disk count as absent.
    pub fn airline(&self, code: &AirlineCode) -> Option<&str> {
        non_empty(self.airlines.get(code.as_str()))
    }

    /// Cached airport name. Empty names read from disk count as absent.
    pub fn airport(&self, code: &AirportCode) -> Option<&str> {
        non_empty(self.airports.get(code.as_str()))
    }

    /// Insert or overwrite an airline entry.
    ///
    /// Returns `false` and leaves the document alone if `name` is empty.
    pub fn insert_airline(&mut self, code: &AirlineCode, name: impl Into<String>) -> bool {
        insert_named(&mut self.airlines, code.as_str(), name.into())
    }

    /// Insert or overwrite an airport entry.
    ///
    /// Returns `false` and leaves the document alone if `name` is empty.
    pub fn insert_airport(&mut self, code: &AirportCode, name: impl Into<String>) -> bool {
        insert_named(&mut self.airports, code.as_str(), name.into())
    }

    /// Number of airlines with a usable name.
    pub fn airline_count(&self) -> usize {
        named_count(&self.airlines)
    }

    /// Number of airports with a usable name.
    pub fn airport_count(&self) -> usize {
        named_count(&self.airports)
    }

    /// All airline entries, ordered by code.
    pub fn airlines(&self) -> &BTreeMap<String, String> {
        &self.airlines
    }

    /// All airport entries, ordered by code.
    pub fn airports(&self) -> &BTreeMap<String, String> {
        &self.airports
    }

    /// When the document was last saved.
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Format version the document was loaded or saved with.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Stamp the document before it is written out.
    pub(super) fn touch(&mut self) {
        self.last_updated = Utc::now();
        self.version = FORMAT_VERSION.to_string();
    }
}

impl Default for CacheDocument {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(name: Option<&String>) -> Option<&str> {
    name.map(String::as_str).filter(|n| !n.is_empty())
}

fn named_count(map: &BTreeMap<String, String>) -> usize {
    map.values().filter(|name| !name.is_empty()).count()
}

fn insert_named(map: &mut BTreeMap<String, String>, code: &str, name: String) -> bool {
    if name.is_empty() {
        return false;
    }
    map.insert(code.to_string(), name);
    true
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339, and also the naive local `YYYY-MM-DDTHH:MM:SS[.f]`
/// form written by earlier versions of the cache.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
    naive
        .and_local_timezone(Local)
        .earliest()
        .map(|ts| ts.with_timezone(&Utc))
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    let parsed = raw.as_deref().and_then(parse_timestamp);
    if parsed.is_none() {
        debug!(raw = ?raw, "unreadable last_updated, using current time");
    }
    Ok(parsed.unwrap_or_else(Utc::now))
}
