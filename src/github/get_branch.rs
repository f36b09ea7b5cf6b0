//! GitHub branch lookup operation.

use crate::github::{error::GitHubError, util::repo_route, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::Deserialize;
use std::sync::Arc;

/// Subset of the `GET /repos/{owner}/{repo}/branches/{branch}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchHead {
    pub name: String,
    pub commit: BranchCommit,
}

/// Commit a branch currently points at.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchCommit {
    pub sha: String,
}

/// Fetch a branch and the commit at its tip.
pub(crate) fn get_branch(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    branch: impl Into<String>,
) -> AsyncTask<Result<BranchHead, GitHubError>> {
    let (owner, repo, branch) = (owner.into(), repo.into(), branch.into());
    spawn_task("get_branch", async move {
        if branch.is_empty() {
            return Err(GitHubError::InvalidInput("branch name must not be empty".into()));
        }
        let route = format!(
            "{}/branches/{}",
            repo_route(&owner, &repo),
            urlencoding::encode(&branch)
        );
        let head: Result<BranchHead, octocrab::Error> = inner.get(route, None::<&()>).await;
        head.map_err(GitHubError::from)
    })
}
