//! Service container for dependency injection

use super::traits::GitHubProvider;
use crate::auth::AppAuth;
use crate::config::Config;
use crate::core::AutotagResult;
use crate::github::client::GitHubClient;
use std::sync::Arc;

/// Service container holding the configuration and the authenticated
/// GitHub client behind a trait object.
///
/// `new` performs the credential exchange exactly once per process run;
/// every subcommand then reuses the same client handle rather than
/// re-authenticating per call.
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<Config>,
    pub github: Arc<dyn GitHubProvider>,
}

impl ServiceContainer {
    /// Create a new service container with production implementations.
    ///
    /// Reads configuration from the environment, exchanges the App
    /// credentials for an installation access token, and binds a client
    /// to it.
    ///
    /// # Errors
    ///
    /// Returns an authentication error if the credential exchange fails;
    /// there is no retry.
    pub async fn new() -> AutotagResult<Self> {
        let config = Config::from_env();

        let auth = AppAuth::new(config.credentials.clone())?;
        let token = auth.installation_token(&config.api_url).await?;
        let client = GitHubClient::new(&config, &token)?;

        Ok(Self {
            config: Arc::new(config),
            github: Arc::new(client),
        })
    }

    /// Create a service container with custom provider implementations.
    ///
    /// This is primarily useful for testing, where a mock provider is
    /// injected in place of the live client.
    pub fn with_providers(config: Arc<Config>, github: Arc<dyn GitHubProvider>) -> Self {
        Self { config, github }
    }

    /// Get the GitHub provider
    pub fn github(&self) -> &dyn GitHubProvider {
        self.github.as_ref()
    }
}
