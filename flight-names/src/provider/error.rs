//! Reference-data provider error types.

/// Errors that can occur when asking a provider for reference data.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check AMADEUS_API_KEY and AMADEUS_API_SECRET")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by reference-data API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// No provider is configured for this run
    #[error("no reference-data provider configured")]
    Offline,
}
