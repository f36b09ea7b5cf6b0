//! GitHub File creation/update operation.

use crate::github::{error::GitHubError, util::repo_route, util::spawn_task};
use crate::runtime::AsyncTask;
use base64::{Engine as _, engine::general_purpose};
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request parameters for creating or updating a file
#[derive(Debug, Clone)]
pub struct CreateOrUpdateFileRequest {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Path to the file in the repository
    pub path: String,
    /// Commit message
    pub message: String,
    /// File content, base64 encoded before it is sent
    pub content: String,
    /// Branch to commit to (defaults to repository default branch)
    pub branch: Option<String>,
    /// SHA of the file being updated (required for updates, omit for creates)
    pub sha: Option<String>,
}

#[derive(Debug, Serialize)]
struct FileWriteBody<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<&'a str>,
}

/// Subset of the contents API write response.
#[derive(Debug, Clone, Deserialize)]
pub struct FileWriteOutcome {
    pub commit: WrittenCommit,
}

/// Commit produced by a contents API write.
#[derive(Debug, Clone, Deserialize)]
pub struct WrittenCommit {
    pub sha: String,
}

/// Standard base64 (padded), the encoding the contents API expects.
#[must_use]
pub fn encode_content(content: &str) -> String {
    general_purpose::STANDARD.encode(content.as_bytes())
}

/// Create **or** update a single file.
pub(crate) fn create_or_update_file(
    inner: Arc<Octocrab>,
    request: CreateOrUpdateFileRequest,
) -> AsyncTask<Result<FileWriteOutcome, GitHubError>> {
    spawn_task("create_or_update_file", async move {
        if request.path.is_empty() {
            return Err(GitHubError::InvalidInput("file path must not be empty".into()));
        }
        let route = format!(
            "{}/contents/{}",
            repo_route(&request.owner, &request.repo),
            request.path
        );
        let body = FileWriteBody {
            message: &request.message,
            content: encode_content(&request.content),
            sha: request.sha.as_deref(),
            branch: request.branch.as_deref(),
        };

        let outcome: Result<FileWriteOutcome, octocrab::Error> =
            inner.put(route, Some(&body)).await;
        outcome.map_err(GitHubError::from)
    })
}
