//! GitHub API type definitions

use serde::{Deserialize, Serialize};

/// A repository tag as returned by the list-tags endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub commit: TagCommit,
    pub zipball_url: String,
    pub tarball_url: String,
    pub node_id: String,
}

/// Commit information in a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCommit {
    pub sha: String,
    pub url: String,
}

/// One commit in a compare-commits response.
///
/// Only the fields autotag reads are typed. Everything else the API
/// returns is preserved in `extra`, so callers see each record exactly as
/// the API produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub commit: CommitDetails,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The nested `commit` object of a compare-commits entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetails {
    pub message: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Compare-commits response. Only the commit range is consumed; the
/// surrounding comparison metadata is discarded.
#[derive(Debug, Clone, Deserialize)]
pub struct Comparison {
    pub commits: Vec<Commit>,
}

/// Response of the annotated-tag-object creation call.
#[derive(Debug, Clone, Deserialize)]
pub struct TagObject {
    pub sha: String,
}

/// GitHub's error envelope.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
