//! Dependency injection infrastructure for autotag
//!
//! This module provides trait-based dependency injection so the CLI
//! commands can be exercised against mock providers instead of the live
//! GitHub API.
//!
//! # Example (Testing)
//! ```
//! use autotag::config::Config;
//! use autotag::di::{mocks::MockGitHubProvider, ServiceContainer};
//! use std::sync::Arc;
//!
//! let config = Arc::new(Config::from_env());
//! let github = Arc::new(MockGitHubProvider::new());
//!
//! let container = ServiceContainer::with_providers(config, github);
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::ServiceContainer;
pub use traits::GitHubProvider;
