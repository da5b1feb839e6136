//! Latest release resolution with retry and backoff

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::release::error::{FetchError, ResolveError};
use crate::release::retry::RetryPolicy;
use crate::release::source::ReleaseSource;
use crate::release::types::latest_published;

/// Resolves a repository to the tag of its latest published release
///
/// Requests go out one at a time. Rate-limit responses and transport failures
/// are retried up to [`RetryPolicy::max_attempts`]; any other error status, and
/// any request that cannot be built, is returned immediately.
pub struct ReleaseResolver<S> {
    source: S,
    policy: RetryPolicy,
}

impl<S: ReleaseSource> ReleaseResolver<S> {
    pub fn new(source: S, policy: RetryPolicy) -> Self {
        Self { source, policy }
    }

    /// Resolve `owner/repo` to its latest non-draft release tag
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - First non-draft release in server order
    /// * `Ok(None)` - No published releases, or the repository is unknown (404)
    /// * `Err(ResolveError)` - Retries exhausted or a non-retryable API error
    pub async fn resolve(&self, owner: &str, repo: &str) -> Result<Option<String>, ResolveError> {
        let mut attempt = 0;

        loop {
            attempt += 1;

            let failure = match self.source.fetch_releases(owner, repo).await {
                Ok(releases) => {
                    debug!(
                        "Fetched {} releases for {}/{}",
                        releases.len(),
                        owner,
                        repo
                    );
                    return Ok(latest_published(&releases).map(str::to_string));
                }
                Err(FetchError::NotFound(name)) => {
                    debug!("No releases endpoint for {}", name);
                    return Ok(None);
                }
                Err(FetchError::Status(status_code)) => {
                    return Err(ResolveError::Api {
                        status_code,
                        message: format!("unexpected status for {}/{}", owner, repo),
                    });
                }
                Err(FetchError::InvalidResponse { status, message }) => {
                    return Err(ResolveError::Api {
                        status_code: status,
                        message,
                    });
                }
                Err(FetchError::Request(source)) => {
                    warn!("Request for {}/{} cannot be sent: {}", owner, repo, source);
                    return Err(ResolveError::Request(source));
                }
                Err(failure) => failure,
            };

            if !self.policy.should_retry(attempt) {
                return Err(match failure {
                    FetchError::Network(source) => ResolveError::Network {
                        attempts: attempt,
                        source,
                    },
                    _ => ResolveError::RateLimited { attempts: attempt },
                });
            }

            let delay = match &failure {
                FetchError::RateLimited { retry_after_secs } => {
                    self.policy.delay_with_hint(attempt, *retry_after_secs)
                }
                _ => self.policy.delay_for_attempt(attempt),
            };

            warn!(
                "Error fetching releases for {}/{} (attempt {}/{}): {}. Retrying in {:?}...",
                owner, repo, attempt, self.policy.max_attempts, failure, delay
            );
            sleep(delay).await;
        }
    }
}
