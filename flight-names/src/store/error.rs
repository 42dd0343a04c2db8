//! Persistent store error types.

/// Errors that can occur when reading or writing the cache document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem operation failed
    #[error("failed to {action} cache file: {source}")]
    Io {
        action: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Contents were not valid JSON, or could not be serialized
    #[error("cache JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, but written by an older, incompatible format
    #[error("incompatible cache format: missing `{missing}`")]
    Incompatible { missing: &'static str },
}

impl StoreError {
    pub(super) fn io(action: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| StoreError::Io { action, source }
    }
}
