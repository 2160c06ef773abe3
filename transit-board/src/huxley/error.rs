//! Huxley2 client error types.

/// Errors from the Huxley2 proxy client.
///
/// Typed for the benefit of logs and tests; nothing here ever crosses the
/// aggregation boundary. The departure path absorbs every variant into an
/// empty result.
#[derive(Debug, thiserror::Error)]
pub enum HuxleyError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("Huxley API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response body
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
