//! Common utilities for integration tests

use std::process::Command;

/// A command for the autotag binary with a scrubbed environment, so host
/// credentials never leak into test runs.
pub fn autotag_command() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_autotag"));
    for key in [
        "GITHUB_REPOSITORY",
        "GITHUB_API_URL",
        "GITHUB_SHA",
        "PRIVATE_KEY",
        "CLIENT_ID",
        "CLIENT_SECRET",
        "APP_ID",
        "INSTALLATION_ID",
    ] {
        command.env_remove(key);
    }
    command
}
