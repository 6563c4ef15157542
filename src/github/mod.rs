//! GitHub API integration
//!
//! This module provides the tag and commit operations autotag performs
//! against a repository:
//! - List version tags (with sequential pagination)
//! - Compare two refs and return the commit range between them
//! - Create a tag reference, optionally backed by an annotated tag object

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::{Commit, Tag, TagCommit};
