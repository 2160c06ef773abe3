//! Huxley2 HTTP client.

use crate::domain::Crs;

use super::error::HuxleyError;
use super::types::{CrsCandidate, DepartureBoard};

/// Default base URL for the Huxley2 proxy.
const DEFAULT_BASE_URL: &str = "https://huxley2.azurewebsites.net";

/// Configuration for the Huxley2 client.
#[derive(Debug, Clone)]
pub struct HuxleyConfig {
    /// Base URL for the proxy
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl HuxleyConfig {
    /// Create a config pointing at the public proxy. No credential is
    /// needed; the proxy holds its own Darwin token.
    pub fn new() -> Self {
        Self {
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

impl Default for HuxleyConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Huxley2 departure board proxy.
#[derive(Debug, Clone)]
pub struct HuxleyClient {
    http: reqwest::Client,
    base_url: String,
}

impl HuxleyClient {
    /// Create a new client from the given configuration.
    pub fn new(config: HuxleyConfig) -> Result<Self, HuxleyError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Look up station code candidates by name.
    pub async fn lookup_code(&self, name: &str) -> Result<Vec<CrsCandidate>, HuxleyError> {
        let url = format!("{}/crs/{}", self.base_url, urlencoding::encode(name));
        let body = self.fetch(&url).await?;

        serde_json::from_str(&body).map_err(|e| HuxleyError::Json {
            message: e.to_string(),
        })
    }

    /// Fetch the departure board for a station, with expanded service
    /// details.
    pub async fn departure_board(&self, crs: &Crs) -> Result<DepartureBoard, HuxleyError> {
        let url = format!("{}/departures/{}?expand=true", self.base_url, crs.as_str());
        let body = self.fetch(&url).await?;

        serde_json::from_str(&body).map_err(|e| HuxleyError::Json {
            message: format!("{e} (body: {})", body.chars().take(200).collect::<String>()),
        })
    }

    async fn fetch(&self, url: &str) -> Result<String, HuxleyError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HuxleyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = HuxleyConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = HuxleyConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        assert!(HuxleyClient::new(HuxleyConfig::new()).is_ok());
    }
}
