//! Mock implementations of service traits for testing

use super::traits::GitHubProvider;
use crate::core::{AutotagError, AutotagResult};
use crate::github::types::{Commit, Tag, TagCommit};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Build a minimal tag for test fixtures.
pub fn sample_tag(name: &str, sha: &str) -> Tag {
    Tag {
        name: name.to_string(),
        commit: TagCommit {
            sha: sha.to_string(),
            url: format!("https://example.com/commits/{}", sha),
        },
        zipball_url: "https://example.com/zipball".to_string(),
        tarball_url: "https://example.com/tarball".to_string(),
        node_id: format!("node-{}", name),
    }
}

/// Mock GitHub provider for testing.
///
/// Serves canned tags and commits from memory and records every call in
/// order, so tests can assert call counts and sequencing.
#[derive(Clone, Default)]
pub struct MockGitHubProvider {
    tags: Arc<Mutex<Vec<Tag>>>,
    commits: Arc<Mutex<Vec<Commit>>>,
    existing_refs: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockGitHubProvider {
    /// Create a new mock provider with no tags or commits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock provider serving the given tags.
    pub fn with_tags(tags: Vec<Tag>) -> Self {
        let mock = Self::new();
        *mock.tags.lock().unwrap() = tags;
        mock
    }

    /// Set the commits returned from `compare_commits`.
    pub fn set_commits(&self, commits: Vec<Commit>) {
        *self.commits.lock().unwrap() = commits;
    }

    /// Mark a tag name as already existing, so `create_tag` conflicts.
    pub fn add_existing_ref(&self, tag_name: &str) {
        self.existing_refs
            .lock()
            .unwrap()
            .insert(tag_name.to_string());
    }

    /// The calls recorded so far, in invocation order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl GitHubProvider for MockGitHubProvider {
    async fn list_tags(&self, fetch_all: bool) -> AutotagResult<Vec<Tag>> {
        self.record(format!("list_tags({})", fetch_all));

        let mut tags = self.tags.lock().unwrap().clone();
        // Mirror the first-page-only contract of the real client.
        if !fetch_all {
            tags.truncate(100);
        }
        Ok(tags)
    }

    async fn compare_commits(&self, base_ref: &str, head_ref: &str) -> AutotagResult<Vec<Commit>> {
        self.record(format!("compare_commits({}, {})", base_ref, head_ref));

        if base_ref == head_ref {
            return Ok(Vec::new());
        }
        Ok(self.commits.lock().unwrap().clone())
    }

    async fn create_tag(
        &self,
        new_tag: &str,
        annotated: bool,
        commit_sha: &str,
    ) -> AutotagResult<()> {
        self.record(format!("create_tag({}, {}, {})", new_tag, annotated, commit_sha));

        if self.existing_refs.lock().unwrap().contains(new_tag) {
            return Err(AutotagError::Conflict("Reference already exists".to_string()));
        }
        self.existing_refs
            .lock()
            .unwrap()
            .insert(new_tag.to_string());
        Ok(())
    }
}
