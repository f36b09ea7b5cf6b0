//! GitHub API error types

use crate::runtime::TaskDropped;
use thiserror::Error;

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Octocrab library error
    #[error("Octocrab error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// The operation's task ended before producing a result
    #[error("Task failed: {0}")]
    TaskFailed(#[from] TaskDropped),
}

impl GitHubError {
    /// HTTP status reported by GitHub, when the failure came from an API response.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GitHubError::Octocrab(octocrab::Error::GitHub { source, .. }) => {
                Some(source.status_code.as_u16())
            }
            _ => None,
        }
    }

    /// Error message from the API response body, if GitHub supplied one.
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            GitHubError::Octocrab(octocrab::Error::GitHub { source, .. })
                if !source.message.is_empty() =>
            {
                Some(source.message.as_str())
            }
            _ => None,
        }
    }
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;
