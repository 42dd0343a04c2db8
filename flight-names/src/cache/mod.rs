//! Tiered name cache for airline and airport codes.
//!
//! Lookups go cache → provider → static table → placeholder. Names found
//! at the provider or static tier are written back and persisted at once,
//! so the rate-limited provider is asked about each code only until it
//! answers. Placeholders are never cached.
//!
//! One `NameCache` is built at startup and passed by `&mut` to whatever
//! needs names; there is no global instance.

mod preload;
mod resolve;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;

use crate::store::{CacheDocument, NameStore};

/// Read-only snapshot of the cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of cached airline names.
    pub airlines_cached: usize,
    /// Number of cached airport names.
    pub airports_cached: usize,
    /// When the document was last saved.
    pub last_updated: DateTime<Utc>,
    /// Whether any entry was added or changed in this process.
    pub modified: bool,
    /// Number of saves attempted in this process.
    pub saves: u64,
}

/// Persistent cache of code → name resolutions.
#[derive(Debug)]
pub struct NameCache {
    store: NameStore,
    document: CacheDocument,
    modified: bool,
    saves: u64,
}

impl NameCache {
    /// Open the cache, loading whatever the store holds.
    ///
    /// Never fails: an unusable file yields an empty cache.
    pub fn open(store: NameStore) -> Self {
        let document = store.load();
        Self {
            store,
            document,
            modified: false,
            saves: 0,
        }
    }

    /// The in-memory document.
    pub fn document(&self) -> &CacheDocument {
        &self.document
    }

    /// Snapshot of entry counts and activity.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            airlines_cached: self.document.airline_count(),
            airports_cached: self.document.airport_count(),
            last_updated: self.document.last_updated(),
            modified: self.modified,
            saves: self.saves,
        }
    }

    /// Write the document out, logging rather than returning failures.
    ///
    /// The in-memory document stays valid if the write fails; only
    /// durability of recent entries is lost.
    fn persist(&mut self) {
        self.saves += 1;
        if let Err(e) = self.store.save(&mut self.document) {
            error!(
                path = %self.store.path().display(),
                error = %e,
                "could not save name cache"
            );
        }
    }
}
