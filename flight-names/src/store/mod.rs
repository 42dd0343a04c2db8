//! Disk persistence for the name cache.
//!
//! The whole cache lives in a single pretty-printed JSON document. Reads
//! never fail from the caller's point of view: a missing, corrupt or
//! old-format file yields a fresh empty document instead.

mod document;
mod error;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

pub use document::{CacheDocument, FORMAT_VERSION};
pub use error::StoreError;

/// Default cache file, relative to the working directory.
pub const DEFAULT_CACHE_FILE: &str = "airport_airline_cache.json";

/// Configuration for the persistent store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the cache file.
    pub path: PathBuf,
}

impl StoreConfig {
    /// Create a new store config for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_FILE)
    }
}

/// Reads and writes the cache document.
#[derive(Debug, Clone)]
pub struct NameStore {
    config: StoreConfig,
}

impl NameStore {
    /// Create a new store with the given config.
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Load the document, substituting a fresh one on any failure.
    pub fn load(&self) -> CacheDocument {
        match self.try_load() {
            Ok(Some(document)) => {
                debug!(
                    path = %self.path().display(),
                    airlines = document.airlines().len(),
                    airports = document.airports().len(),
                    "loaded name cache"
                );
                document
            }
            Ok(None) => CacheDocument::new(),
            Err(e) => {
                warn!(
                    path = %self.path().display(),
                    error = %e,
                    "could not load name cache, starting a new one"
                );
                CacheDocument::new()
            }
        }
    }

    /// Load the document, reporting why it could not be used.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn try_load(&self) -> Result<Option<CacheDocument>, StoreError> {
        let contents = match std::fs::read_to_string(&self.config.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io("read")(e)),
        };

        let raw: Value = serde_json::from_str(&contents)?;

        // Documents from before the two-namespace layout are replaced, not merged
        for key in ["airlines", "airports"] {
            if raw.get(key).is_none() {
                return Err(StoreError::Incompatible { missing: key });
            }
        }

        Ok(Some(serde_json::from_value(raw)?))
    }

    /// Stamp and write the document.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, document: &mut CacheDocument) -> Result<(), StoreError> {
        document.touch();

        if let Some(parent) = self.config.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(StoreError::io("create directory for"))?;
        }

        let json = serde_json::to_string_pretty(document)?;
        std::fs::write(&self.config.path, json).map_err(StoreError::io("write"))?;

        debug!(path = %self.path().display(), "saved name cache");
        Ok(())
    }

    /// Get the cache file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AirlineCode, AirportCode};
    use tempfile::tempdir;

    fn store_at(path: &Path) -> NameStore {
        NameStore::new(StoreConfig::new(path))
    }

    #[test]
    fn missing_file_gives_fresh_document() {
        let dir = tempdir().unwrap();
        let store = store_at(&dir.path().join("absent.json"));

        assert!(store.try_load().unwrap().is_none());

        let doc = store.load();
        assert!(doc.airlines().is_empty());
        assert!(doc.airports().is_empty());
        assert_eq!(doc.version(), FORMAT_VERSION);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let store = store_at(&dir.path().join("cache.json"));

        let mut doc = CacheDocument::new();
        doc.insert_airline(&AirlineCode::parse("LH").unwrap(), "Lufthansa");
        doc.insert_airline(&AirlineCode::parse("WF").unwrap(), "Widerøe");
        doc.insert_airport(&AirportCode::parse("TLV").unwrap(), "Ben Gurion Airport, Tel Aviv");
        store.save(&mut doc).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.airlines().len(), 2);
        assert_eq!(loaded.airports().len(), 1);
        assert_eq!(loaded.airlines(), doc.airlines());
        assert_eq!(loaded.airports(), doc.airports());
        assert_eq!(loaded.version(), FORMAT_VERSION);
    }

    #[test]
    fn saved_file_is_indented_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.json");
        let store = store_at(&path);

        let mut doc = CacheDocument::new();
        doc.insert_airline(&AirlineCode::parse("WF").unwrap(), "Widerøe");
        store.save(&mut doc).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"airlines\""));
        assert!(text.contains("Widerøe"));
        assert!(text.contains("\"version\": \"1.0\""));
    }

    #[test]
    fn save_restamps_version_and_timestamp() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(
            &path,
            r#"{"airlines": {}, "airports": {}, "last_updated": "2020-01-01T00:00:00Z", "version": "0.9"}"#,
        )
        .unwrap();
        let store = store_at(&path);

        let mut doc = store.load();
        assert_eq!(doc.version(), "0.9");
        let old = doc.last_updated();

        store.save(&mut doc).unwrap();
        assert_eq!(doc.version(), FORMAT_VERSION);
        assert!(doc.last_updated() > old);
    }

    #[test]
    fn old_format_is_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, r#"{"airlines": {"LH": "Lufthansa"}, "last_updated": "x"}"#)
            .unwrap();
        let store = store_at(&path);

        assert!(matches!(
            store.try_load(),
            Err(StoreError::Incompatible { missing: "airports" })
        ));

        let doc = store.load();
        assert!(doc.airlines().is_empty());
        assert_eq!(doc.version(), FORMAT_VERSION);
    }

    #[test]
    fn corrupt_file_is_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, "{\"airlines\": {\"LH\": ").unwrap();
        let store = store_at(&path);

        assert!(matches!(store.try_load(), Err(StoreError::Json(_))));
        assert!(store.load().airlines().is_empty());
    }

    #[test]
    fn legacy_naive_timestamp_is_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(
            &path,
            r#"{"airlines": {"LY": "El Al Israel Airlines"}, "airports": {}, "last_updated": "2025-11-02T09:15:42.512345"}"#,
        )
        .unwrap();

        let doc = store_at(&path).load();
        assert_eq!(doc.airlines().len(), 1);
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("cache.json");
        let store = store_at(&path);

        store.save(&mut CacheDocument::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_failure_is_reported() {
        let dir = tempdir().unwrap();
        // A directory where the file should be makes the write fail
        let path = dir.path().join("taken");
        std::fs::create_dir(&path).unwrap();
        let store = store_at(&path);

        let err = store.save(&mut CacheDocument::new()).unwrap_err();
        assert!(matches!(err, StoreError::Io { action: "write", .. }));
    }
}
