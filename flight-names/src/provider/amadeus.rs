//! Amadeus reference-data API client.
//!
//! Authenticates with OAuth2 client credentials and keeps the bearer token
//! until shortly before it expires.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{AirlineCode, AirportCode};

use super::ReferenceProvider;
use super::error::ProviderError;
use super::types::{AirlineRecord, AirportRecord, DataResponse};

/// Default base URL (Amadeus self-service test environment).
const DEFAULT_BASE_URL: &str = "https://test.api.amadeus.com";

/// Refresh the token this long before Amadeus says it expires.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(30);

/// Configuration for the Amadeus client.
#[derive(Debug, Clone)]
pub struct AmadeusConfig {
    /// OAuth2 client ID
    pub api_key: String,
    /// OAuth2 client secret
    pub api_secret: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl AmadeusConfig {
    /// Create a new config with the given credentials.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (production, or a local stub).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OAuth2 token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug)]
struct AccessToken {
    value: String,
    expires_at: Instant,
}

/// Client for the Amadeus reference-data API.
#[derive(Debug, Clone)]
pub struct AmadeusClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
    token: Arc<Mutex<Option<AccessToken>>>,
}

impl AmadeusClient {
    /// Create a new Amadeus client.
    pub fn new(config: AmadeusConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            api_secret: config.api_secret,
            token: Arc::new(Mutex::new(None)),
        })
    }

    /// Get a bearer token, fetching a new one if needed.
    async fn access_token(&self) -> Result<String, ProviderError> {
        let mut guard = self.token.lock().await;

        if let Some(token) = guard.as_ref()
            && token.expires_at > Instant::now()
        {
            return Ok(token.value.clone());
        }

        let url = format!("{}/v1/security/oauth2/token", self.base_url);
        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.api_key.as_str()),
                ("client_secret", self.api_secret.as_str()),
            ])
            .send()
            .await?;

        let token: TokenResponse = read_json(response).await?;
        debug!(expires_in = token.expires_in, "obtained Amadeus access token");

        // An expiry too far out to represent is not cached at all
        *guard = token_expiry(Instant::now(), token.expires_in).map(|expires_at| AccessToken {
            value: token.access_token.clone(),
            expires_at,
        });

        Ok(token.access_token)
    }

    /// Authenticated GET returning the `data` array of the response.
    async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ProviderError> {
        let token = self.access_token().await?;
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        match read_json::<DataResponse<T>>(response).await {
            Ok(body) => Ok(body.data),
            Err(ProviderError::Unauthorized) => {
                // Token was revoked early; fetch a new one next time
                *self.token.lock().await = None;
                Err(ProviderError::Unauthorized)
            }
            Err(e) => Err(e),
        }
    }
}

/// When a token issued at `now` with the given lifetime should be replaced.
///
/// Returns `None` if the lifetime overflows the clock.
fn token_expiry(now: Instant, expires_in: u64) -> Option<Instant> {
    let lifetime = Duration::from_secs(expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);
    now.checked_add(lifetime)
}

/// Check the status and decode the body.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ProviderError> {
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(ProviderError::Unauthorized);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(ProviderError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| ProviderError::Json {
        message: e.to_string(),
    })
}

impl ReferenceProvider for AmadeusClient {
    async fn lookup_airline(
        &self,
        code: &AirlineCode,
    ) -> Result<Vec<AirlineRecord>, ProviderError> {
        self.get_data(
            "/v1/reference-data/airlines",
            &[("airlineCodes", code.as_str())],
        )
        .await
    }

    async fn lookup_airport(
        &self,
        code: &AirportCode,
    ) -> Result<Vec<AirportRecord>, ProviderError> {
        self.get_data(
            "/v1/reference-data/locations",
            &[("keyword", code.as_str()), ("subType", "AIRPORT")],
        )
        .await
    }
}
