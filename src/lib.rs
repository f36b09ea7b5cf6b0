//! `github_enroll` - enroll participants into a GitHub-hosted coding task
//!
//! A participant's identifier is turned into a branch name, the branch is created
//! from the tip of the task repository's base branch, and the participant's draft
//! is committed as the task file on that branch. GitHub access goes through a thin
//! octocrab wrapper where every operation runs as its own task.

// Module declarations
pub mod enrollment;
pub mod github;
pub mod runtime;

// Re-export runtime types
pub use runtime::{AsyncTask, TaskDropped};

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder};

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

// Re-export GitHub operation types
pub use github::{
    BranchHead, CreateOrUpdateFileRequest, CreatedRef, FileLookup, FileWriteOutcome,
    encode_content,
};

// Re-export the enrollment workflow
pub use enrollment::{
    EnrollmentConfig, EnrollmentError, EnrollmentWorkflow, ProvisionedBranch, Session,
    SessionState, SubmissionReceipt, ValidationError, derive_branch_name,
};
