//! GitHub API utilities

use crate::github::error::GitHubResult;
use crate::runtime::AsyncTask;
use std::future::Future;

/// Spawn a GitHub API operation as a named task.
#[inline]
pub fn spawn_task<T, F>(operation: &'static str, work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    AsyncTask::spawn(operation, work)
}

/// Await an operation handle, folding a dropped task into `GitHubError::TaskFailed`.
pub async fn join_task<T>(task: AsyncTask<GitHubResult<T>>) -> GitHubResult<T>
where
    T: Send + 'static,
{
    task.await?
}

/// `/repos/{owner}/{repo}` with both segments percent-encoded.
#[must_use]
pub(crate) fn repo_route(owner: &str, repo: &str) -> String {
    format!(
        "/repos/{}/{}",
        urlencoding::encode(owner),
        urlencoding::encode(repo)
    )
}
