//! Autotag: tag and commit automation for GitHub repositories
//!
//! This crate provides the main autotag library, re-exporting core
//! functionality from `autotag-core` and organizing the modules that talk
//! to the GitHub REST API on behalf of the `autotag` binary.

pub use autotag_core::{format_error_with_help, AutotagError, AutotagResult, ErrorHelp};

/// Core module re-exported for library consumers.
pub mod core {
    pub use autotag_core::core::*;
    pub use autotag_core::*;
}

/// Configuration management.
pub mod config;

/// GitHub App authentication.
pub mod auth;

/// GitHub API integration.
pub mod github;

/// Dependency injection infrastructure.
pub mod di;
