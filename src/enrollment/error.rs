//! Enrollment workflow error types

use crate::github::GitHubError;
use thiserror::Error;

pub const BRANCH_CREATION_FAILED: &str =
    "Failed to create branch. Please check your GitHub permissions and the repository settings.";
pub const SUBMISSION_CONFLICT: &str =
    "Failed to submit the code. Ensure the file exists and your branch is correct.";
pub const SUBMISSION_FAILED: &str = "Failed to submit the code. Please try again later.";

/// Local precondition failures, detected before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("GitHub ID is required")]
    IdentifierRequired,

    #[error("You need to enroll and create a branch first.")]
    NotEnrolled,

    #[error("GitHub ID is missing. Please enroll first.")]
    IdentifierMissing,

    /// The session is not in a state that accepts this action
    #[error("Cannot {action} while the session is {state}.")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

/// Error types for the enrollment workflow
#[derive(Debug, Error)]
pub enum EnrollmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Base commit lookup or ref creation failed
    #[error("branch creation failed: {0}")]
    BranchCreation(#[source] GitHubError),

    /// GitHub rejected the write (stale or missing blob SHA, bad branch)
    #[error("submission rejected: {0}")]
    Conflict(#[source] GitHubError),

    /// GitHub answered with an error message
    #[error("GitHub error: {message}")]
    Remote {
        message: String,
        #[source]
        source: GitHubError,
    },

    /// Failure with no usable API message
    #[error("submission failed: {0}")]
    Submission(#[source] GitHubError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl EnrollmentError {
    /// Classify a failure from the submission path (file lookup or write).
    #[must_use]
    pub fn from_submission(err: GitHubError) -> Self {
        match err.status_code() {
            Some(409 | 422) => EnrollmentError::Conflict(err),
            Some(_) => match err.api_message() {
                Some(message) => EnrollmentError::Remote {
                    message: message.to_string(),
                    source: err,
                },
                None => EnrollmentError::Submission(err),
            },
            None => EnrollmentError::Submission(err),
        }
    }

    /// Message to show the participant.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            EnrollmentError::Validation(v) => v.to_string(),
            EnrollmentError::BranchCreation(_) => BRANCH_CREATION_FAILED.to_string(),
            EnrollmentError::Conflict(_) => SUBMISSION_CONFLICT.to_string(),
            EnrollmentError::Remote { message, .. } => format!("Error: {message}"),
            EnrollmentError::Submission(_) => SUBMISSION_FAILED.to_string(),
            EnrollmentError::Config(msg) => format!("Configuration error: {msg}"),
        }
    }

    /// True when the failure was caught locally without touching the network.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            EnrollmentError::Validation(_) | EnrollmentError::Config(_)
        )
    }
}
