use std::time::Duration;

use crate::release::retry::RetryPolicy;

// =============================================================================
// GitHub API
// =============================================================================

/// Default base URL for the GitHub REST API
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// `X-GitHub-Api-Version` sent with every request
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("action-latest/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for a single release listing request in milliseconds (10 seconds)
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Number of attempts before a rate-limited or failing request is given up
pub const MAX_ATTEMPTS: u32 = 3;

/// Delay before the first retry in milliseconds; doubled on each further retry
pub const BASE_RETRY_DELAY_MS: u64 = 1_000;

/// Upper bound for a single retry delay in milliseconds (30 seconds)
pub const MAX_RETRY_DELAY_MS: u64 = 30_000;

/// Settings for talking to the releases endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// API base URL (overridable for GitHub Enterprise)
    pub base_url: String,
    /// Bearer token raising the rate-limit ceiling
    pub token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl ResolverConfig {
    /// Builds a config for `base_url`, ignoring blank tokens
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: normalize_token(token),
            ..Self::default()
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            token: None,
            timeout: Duration::from_millis(REQUEST_TIMEOUT_MS),
            retry: RetryPolicy::default(),
        }
    }
}

/// `GITHUB_TOKEN=` in CI is common; treat it as no token at all.
fn normalize_token(token: Option<String>) -> Option<String> {
    token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
