//! Release layer: listing a repository's releases and picking the latest
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────────┐
//! │ ReleaseResolver  │────▶│  ReleaseSource  │
//! │ (retry, drafts)  │     │ (one request)   │
//! └──────────────────┘     └─────────────────┘
//!                                   │
//!                                   ▼
//!                          ┌─────────────────┐
//!                          │ GitHub Releases │
//!                          │      API        │
//!                          └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`source`]: Trait for a single release-listing request
//! - [`github`]: GitHub REST API implementation
//! - [`resolver`]: Retry/backoff and draft filtering on top of a source
//! - [`retry`]: Backoff policy
//! - [`types`]: `ReleaseInfo` rows
//! - [`error`]: Per-request and per-resolution errors

pub mod error;
pub mod github;
pub mod resolver;
pub mod retry;
pub mod source;
pub mod types;

pub use error::{FetchError, ResolveError};
pub use github::GitHubReleaseSource;
pub use resolver::ReleaseResolver;
pub use retry::RetryPolicy;
pub use source::ReleaseSource;
pub use types::ReleaseInfo;
