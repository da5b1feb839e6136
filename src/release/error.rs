use thiserror::Error;

/// Failure of a single request to the releases endpoint
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure that may succeed on a later attempt
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// Request that can never succeed as built (bad base URL, redirect loop, bad body encoding)
    #[error("Request error: {0}")]
    Request(reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Repository not found: {0}")]
    NotFound(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Invalid response (HTTP {status}): {message}")]
    InvalidResponse { status: u16, message: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() || e.is_redirect() || e.is_decode() {
            FetchError::Request(e)
        } else {
            FetchError::Network(e)
        }
    }
}

/// Failure of a resolution after the retry policy has been applied
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Network error after {attempts} attempts: {source}")]
    Network {
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request error: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Rate limit exceeded after {attempts} attempts")]
    RateLimited { attempts: u32 },

    #[error("GitHub API error (HTTP {status_code}): {message}")]
    Api { status_code: u16, message: String },
}
