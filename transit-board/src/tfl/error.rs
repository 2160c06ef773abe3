//! TfL client error types.

/// Errors from the TfL StopPoint API client.
///
/// These are the only errors that cross the aggregation boundary: the
/// primary feed is mandatory, so its failures reach the caller, which is
/// expected to offer a manual retry. Nothing is retried internally.
#[derive(Debug, thiserror::Error)]
pub enum TflError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("TfL API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response body
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
