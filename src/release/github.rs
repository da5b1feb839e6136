//! GitHub Releases API source implementation

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use tracing::{debug, warn};

use crate::config::{GITHUB_API_VERSION, ResolverConfig, USER_AGENT};
use crate::release::error::FetchError;
use crate::release::source::ReleaseSource;
use crate::release::types::ReleaseInfo;

/// Source implementation for the GitHub Releases API
pub struct GitHubReleaseSource {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubReleaseSource {
    /// Creates a source from the resolver configuration
    pub fn new(config: &ResolverConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }
}

/// 429, or a 403 that says the quota is exhausted
fn is_rate_limited(status: StatusCode, headers: &HeaderMap) -> bool {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return true;
    }

    status == StatusCode::FORBIDDEN
        && (headers.contains_key("retry-after")
            || headers
                .get("x-ratelimit-remaining")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.trim() == "0"))
}

fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    headers
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubReleaseSource {
    async fn fetch_releases(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<ReleaseInfo>, FetchError> {
        let url = format!("{}/repos/{}/{}/releases", self.base_url, owner, repo);
        debug!("Fetching releases: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(format!("{}/{}", owner, repo)));
        }

        if is_rate_limited(status, response.headers()) {
            return Err(FetchError::RateLimited {
                retry_after_secs: retry_after_secs(response.headers()),
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse GitHub releases response: {}", e);
            FetchError::InvalidResponse {
                status: status.as_u16(),
                message: e.to_string(),
            }
        })
    }
}
