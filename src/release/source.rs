//! Release source trait for listing a repository's releases

#[cfg(test)]
use mockall::automock;

use crate::release::error::FetchError;
use crate::release::types::ReleaseInfo;

/// Trait for listing releases of a repository
///
/// An implementation performs exactly one request per call; retrying is the
/// resolver's job.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Lists the releases of `owner/repo`
    ///
    /// # Returns
    /// * `Ok(Vec<ReleaseInfo>)` - Releases as ordered by the server (newest first)
    /// * `Err(FetchError)` - If the request fails
    async fn fetch_releases(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<ReleaseInfo>, FetchError>;
}

#[async_trait::async_trait]
impl<T: ReleaseSource + ?Sized> ReleaseSource for std::sync::Arc<T> {
    async fn fetch_releases(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<ReleaseInfo>, FetchError> {
        (**self).fetch_releases(owner, repo).await
    }
}
