//! Release source test utilities

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use action_latest::lookup::ActionLookup;
use action_latest::release::error::FetchError;
use action_latest::release::resolver::ReleaseResolver;
use action_latest::release::retry::RetryPolicy;
use action_latest::release::source::ReleaseSource;
use action_latest::release::types::ReleaseInfo;

/// In-memory release listings keyed by `owner/repo`
///
/// Unknown repositories answer 404. Every call is recorded.
#[derive(Default)]
pub struct FakeReleaseSource {
    releases: HashMap<String, Vec<ReleaseInfo>>,
    statuses: HashMap<String, u16>,
    calls: Mutex<Vec<String>>,
    watched: Option<SharedOutput>,
    output_at_calls: Mutex<Vec<String>>,
}

/// Output buffer that can be written by the app and read by a source
#[derive(Clone, Default)]
pub struct SharedOutput(Arc<Mutex<Vec<u8>>>);

impl SharedOutput {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl FakeReleaseSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Releases newest first; tags ending in `-draft` are marked as drafts
    pub fn with_releases(mut self, name: &str, tags: Vec<&str>) -> Self {
        self.releases.insert(
            name.to_string(),
            tags.into_iter()
                .map(|tag| ReleaseInfo::new(tag, tag.ends_with("-draft")))
                .collect(),
        );
        self
    }

    /// Answer every request for `name` with an error status
    pub fn with_status(mut self, name: &str, status: u16) -> Self {
        self.statuses.insert(name.to_string(), status);
        self
    }

    /// Snapshot `output` at the start of every call
    pub fn watching(mut self, output: SharedOutput) -> Self {
        self.watched = Some(output);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// What had been written to the watched output when each call started
    pub fn output_at_calls(&self) -> Vec<String> {
        self.output_at_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReleaseSource for FakeReleaseSource {
    async fn fetch_releases(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<ReleaseInfo>, FetchError> {
        let name = format!("{}/{}", owner, repo);
        self.calls.lock().unwrap().push(name.clone());
        if let Some(output) = &self.watched {
            self.output_at_calls.lock().unwrap().push(output.contents());
        }

        if let Some(status) = self.statuses.get(&name) {
            return Err(FetchError::Status(*status));
        }

        match self.releases.get(&name) {
            Some(releases) => Ok(releases.clone()),
            None => Err(FetchError::NotFound(name)),
        }
    }
}

/// Lookup over `source` that retries without sleeping
pub fn create_test_lookup(
    source: Arc<FakeReleaseSource>,
) -> ActionLookup<Arc<FakeReleaseSource>> {
    ActionLookup::new(ReleaseResolver::new(source, RetryPolicy::immediate(3)))
}
