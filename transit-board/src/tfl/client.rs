//! TfL StopPoint HTTP client.
//!
//! Async methods for station search, live arrivals, and the credential
//! probe. The application key rides along as the `app_key` query parameter
//! on every request.

use chrono::Utc;

use crate::domain::{Arrival, Station};

use super::convert::raw_to_arrival;
use super::error::TflError;
use super::types::{RawArrival, StopPointSearchResponse};

/// Default base URL for the TfL Unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Mode filter applied to every station search. Bus-only stops are not
/// useful on this board, so `bus` is deliberately absent.
const SEARCH_MODES: &str = "tube,dlr,overground,elizabeth-line,tram,national-rail";

/// Configuration for the TfL client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Application key registered at api.tfl.gov.uk
    pub app_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
    /// Create a new config with the given application key.
    pub fn new(app_key: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// TfL StopPoint API client.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    base_url: String,
    app_key: String,
}

impl TflClient {
    /// Create a new client from the given configuration.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            app_key: config.app_key,
        })
    }

    /// Search for stations by name.
    pub async fn search(&self, query: &str) -> Result<Vec<Station>, TflError> {
        let url = format!(
            "{}/StopPoint/Search/{}",
            self.base_url,
            urlencoding::encode(query)
        );

        let response = self
            .http
            .get(&url)
            .query(&[("modes", SEARCH_MODES), ("app_key", self.app_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: StopPointSearchResponse =
            serde_json::from_str(&body).map_err(|e| TflError::Json {
                message: format!("{e} (body: {})", excerpt(&body)),
            })?;

        Ok(parsed
            .matches
            .into_iter()
            .map(|m| Station {
                id: m.id,
                name: m.name,
                modes: m.modes,
                lat: m.lat,
                lon: m.lon,
            })
            .collect())
    }

    /// Fetch live arrivals for a station.
    ///
    /// A 404 means the StopPoint has no arrivals feed; that is a valid
    /// empty result, not a failure. Any other non-success status is a hard
    /// failure for the caller to surface.
    pub async fn arrivals(&self, station_id: &str) -> Result<Vec<Arrival>, TflError> {
        let url = format!(
            "{}/StopPoint/{}/Arrivals",
            self.base_url,
            urlencoding::encode(station_id)
        );

        let response = self
            .http
            .get(&url)
            .query(&[("app_key", self.app_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let raw: Vec<RawArrival> = serde_json::from_str(&body).map_err(|e| TflError::Json {
            message: format!("{e} (body: {})", excerpt(&body)),
        })?;

        tracing::debug!(station_id, count = raw.len(), "fetched TfL arrivals");

        let observed_at = Utc::now().to_rfc3339();
        Ok(raw
            .into_iter()
            .map(|r| raw_to_arrival(r, &observed_at))
            .collect())
    }

    /// Check whether the application key is accepted.
    ///
    /// Used only at onboarding, and deliberately distinct from fetch
    /// failures: transport errors read as "not valid" rather than
    /// surfacing.
    pub async fn validate_key(&self) -> bool {
        let url = format!("{}/Line/Meta/Modes", self.base_url);

        match self
            .http
            .get(&url)
            .query(&[("app_key", self.app_key.as_str())])
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

/// Leading slice of a response body, for parse error context.
fn excerpt(body: &str) -> String {
    body.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = TflConfig::new("key-123")
            .with_base_url("http://localhost:8080")
            .with_timeout(5);

        assert_eq!(config.app_key, "key-123");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_defaults() {
        let config = TflConfig::new("key-123");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        assert!(TflClient::new(TflConfig::new("key-123")).is_ok());
    }

    #[tokio::test]
    async fn unreachable_host_is_a_hard_failure() {
        let config = TflConfig::new("key-123")
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(1);
        let client = TflClient::new(config).unwrap();

        assert!(client.arrivals("940GZZLUOVL").await.is_err());
    }

    #[tokio::test]
    async fn unreachable_host_reads_as_invalid_key() {
        let config = TflConfig::new("key-123")
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(1);
        let client = TflClient::new(config).unwrap();

        assert!(!client.validate_key().await);
    }
}
