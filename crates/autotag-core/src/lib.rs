//! Core utilities for autotag.
//!
//! Holds the shared error taxonomy and the error-help formatting used by
//! the `autotag` binary. Kept as a separate crate so library consumers can
//! match on error classes without pulling in the CLI.

pub mod core;

pub use core::error::{AutotagError, AutotagResult};
pub use core::error_help::{format_error_with_help, ErrorHelp};
