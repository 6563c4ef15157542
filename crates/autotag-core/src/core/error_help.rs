//! Helpful suggestions attached to error messages.
//!
//! CI logs are usually the only place an autotag failure is ever seen, so
//! each error class carries remediation hints alongside the raw message.

use crate::core::error::AutotagError;

/// Remediation hints for one error class.
pub struct ErrorHelp {
    pub suggestions: Vec<&'static str>,
}

/// Look up the suggestions for an error.
pub fn help_for(error: &AutotagError) -> ErrorHelp {
    let suggestions = match error {
        AutotagError::Auth(_) => vec![
            "Check that PRIVATE_KEY contains the GitHub App's PEM-encoded RSA key",
            "Check that APP_ID and INSTALLATION_ID are set to numeric identifiers",
            "Verify the App is installed on this repository",
        ],
        AutotagError::NotFound(_) => vec![
            "Verify the ref or commit SHA exists in the repository",
            "Check that GITHUB_REPOSITORY names the intended owner/repo",
        ],
        AutotagError::Conflict(_) => vec![
            "The tag already exists; delete it first or choose a different name",
        ],
        AutotagError::Http(_) => vec![
            "Check network connectivity to the GitHub API",
            "Check GITHUB_API_URL if targeting a GitHub Enterprise instance",
        ],
        AutotagError::Api { .. } => vec![
            "Consult the GitHub API documentation for this status code",
        ],
        AutotagError::Config(_) => vec![
            "Check the environment variables documented in the README",
        ],
        _ => vec![],
    };

    ErrorHelp { suggestions }
}

/// Format an error with its remediation hints for display.
pub fn format_error_with_help(error: &AutotagError) -> String {
    let help = help_for(error);

    let mut output = format!("Error: {}", error);
    if !help.suggestions.is_empty() {
        output.push_str("\n\nSuggestions:");
        for suggestion in &help.suggestions {
            output.push_str(&format!("\n  - {}", suggestion));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_includes_credential_hints() {
        let err = AutotagError::Auth("token exchange failed".to_string());
        let formatted = format_error_with_help(&err);
        assert!(formatted.contains("Authentication error: token exchange failed"));
        assert!(formatted.contains("PRIVATE_KEY"));
        assert!(formatted.contains("INSTALLATION_ID"));
    }

    #[test]
    fn test_conflict_error_suggests_deleting_tag() {
        let err = AutotagError::Conflict("Reference already exists".to_string());
        let formatted = format_error_with_help(&err);
        assert!(formatted.contains("already exists; delete it first"));
    }

    #[test]
    fn test_error_without_suggestions_is_plain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = AutotagError::Io(io_err);
        let formatted = format_error_with_help(&err);
        assert!(!formatted.contains("Suggestions:"));
    }
}
