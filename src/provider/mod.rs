//! Release provider abstraction.
//!
//! A provider answers one question: what is the latest published release of
//! a repository. `GitHubProvider` is the only implementation.

mod github;

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;

pub use github::{DEFAULT_API_URL, GitHubProvider};

/// Repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// A downloadable asset from a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseAsset {
    pub name: String,
    pub download_url: String,
    pub size: u64,
}

/// The latest release of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Release {
    /// Version tag (e.g., "v1.0.0")
    pub tag_name: String,
    /// Tag without its leading "v"
    pub version: String,
    /// Release name/title, empty when the release has none
    pub name: String,
    /// Publication date (ISO 8601), empty when unpublished
    pub published_at: String,
    /// Downloadable assets, in upstream order
    pub assets: Vec<ReleaseAsset>,
}

/// Strips at most one leading `v` from a tag.
///
/// `"v1.2.3"` becomes `"1.2.3"`, `"vv1"` becomes `"v1"`, `"1.0"` is unchanged.
pub fn version_from_tag(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

/// Trait for release providers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Fetch the latest published release.
    async fn get_latest_release(&self, repo: &RepoId) -> Result<Release>;
}

/// Fetch the latest release of `owner/repo`, collapsing every failure.
///
/// Network errors, timeouts, non-2xx statuses and malformed bodies are all
/// reported on stderr and turned into `None`.
#[tracing::instrument(skip(provider))]
pub async fn get_latest_release<P: Provider + ?Sized>(
    provider: &P,
    owner: &str,
    repo: &str,
) -> Option<Release> {
    let repo = RepoId::new(owner, repo);
    match provider.get_latest_release(&repo).await {
        Ok(release) => Some(release),
        Err(e) => {
            eprintln!("Error fetching latest release: {:#}", e);
            None
        }
    }
}
