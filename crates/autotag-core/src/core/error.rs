use thiserror::Error;

pub type AutotagResult<T> = Result<T, AutotagError>;

#[derive(Error, Debug)]
pub enum AutotagError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Credential exchange failed or the API rejected the token.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// A ref or commit could not be resolved by the API.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The tag reference already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other non-success API response.
    #[error("GitHub API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
