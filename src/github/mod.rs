//! GitHub API operations module
//!
//! Provides the repository operations the enrollment workflow needs, on top of octocrab.

pub mod client;
pub mod error;
pub mod util;

pub use client::{GitHubClient, GitHubClientBuilder};

pub use error::{GitHubError, GitHubResult};
pub use util::{join_task, spawn_task};

pub use create_branch::{CreatedRef, RefTarget};
pub use create_or_update_file::{
    CreateOrUpdateFileRequest, FileWriteOutcome, WrittenCommit, encode_content,
};
pub use get_branch::{BranchCommit, BranchHead};
pub use get_file_contents::FileLookup;

// GitHub API operations - Repositories (internal)
pub(crate) mod create_branch;
pub(crate) mod create_or_update_file;
pub(crate) mod get_branch;
pub(crate) mod get_file_contents;
