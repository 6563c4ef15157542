use crate::auth::AppCredentials;
use std::env;

/// Default API endpoint for github.com.
const DEFAULT_API_URL: &str = "https://api.github.com";

/// Runtime configuration, read from the ambient environment.
///
/// The hosting automation runtime supplies the repository slug via
/// `GITHUB_REPOSITORY`; autotag never computes it. Loading is deliberately
/// lenient: a missing variable yields an empty component and the resulting
/// failure surfaces from the API call that needs it, not from here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository owner (from `GITHUB_REPOSITORY`, the part before `/`).
    pub owner: String,

    /// Repository name (from `GITHUB_REPOSITORY`, the part after `/`).
    pub repo: String,

    /// API base URL. `GITHUB_API_URL` overrides the github.com default,
    /// e.g. for GitHub Enterprise instances.
    pub api_url: String,

    /// GitHub App credentials for the installation token exchange.
    pub credentials: AppCredentials,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        let slug = env::var("GITHUB_REPOSITORY").unwrap_or_default();
        let (owner, repo) = match slug.split_once('/') {
            Some((owner, repo)) => (owner.to_string(), repo.to_string()),
            None => (slug, String::new()),
        };

        let api_url = env::var("GITHUB_API_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            owner,
            repo,
            api_url,
            credentials: AppCredentials::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "GITHUB_REPOSITORY",
            "GITHUB_API_URL",
            "PRIVATE_KEY",
            "CLIENT_ID",
            "CLIENT_SECRET",
            "APP_ID",
            "INSTALLATION_ID",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_with_repository_slug() {
        clear_env();
        env::set_var("GITHUB_REPOSITORY", "acme/widgets");

        let config = Config::from_env();
        assert_eq!(config.owner, "acme");
        assert_eq!(config.repo, "widgets");
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    #[serial]
    fn test_from_env_missing_variables_defaults_empty() {
        clear_env();

        let config = Config::from_env();
        assert_eq!(config.owner, "");
        assert_eq!(config.repo, "");
        assert_eq!(config.credentials.private_key, "");
        assert_eq!(config.credentials.installation_id, "");
    }

    #[test]
    #[serial]
    fn test_from_env_api_url_override() {
        clear_env();
        env::set_var("GITHUB_REPOSITORY", "acme/widgets");
        env::set_var("GITHUB_API_URL", "https://github.example.com/api/v3");

        let config = Config::from_env();
        assert_eq!(config.api_url, "https://github.example.com/api/v3");
    }

    #[test]
    #[serial]
    fn test_from_env_slug_without_slash() {
        clear_env();
        env::set_var("GITHUB_REPOSITORY", "just-an-owner");

        let config = Config::from_env();
        assert_eq!(config.owner, "just-an-owner");
        assert_eq!(config.repo, "");
    }
}
