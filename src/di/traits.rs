//! Trait definitions for dependency injection

use crate::core::AutotagResult;
use crate::github::types::{Commit, Tag};
use async_trait::async_trait;

/// Trait for the tag and commit operations autotag performs.
///
/// Each operation is a single, stateless call against the remote API;
/// implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait GitHubProvider: Send + Sync {
    /// List version tags. When `fetch_all` is false only the first page
    /// (at most 100 tags) is returned.
    async fn list_tags(&self, fetch_all: bool) -> AutotagResult<Vec<Tag>>;

    /// Return the commits in the range `base_ref...head_ref` (base
    /// excluded, head included).
    async fn compare_commits(&self, base_ref: &str, head_ref: &str) -> AutotagResult<Vec<Commit>>;

    /// Create `refs/tags/<new_tag>` at `commit_sha`, optionally backed by
    /// an annotated tag object.
    async fn create_tag(&self, new_tag: &str, annotated: bool, commit_sha: &str)
        -> AutotagResult<()>;
}
