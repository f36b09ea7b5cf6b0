//! GitHub Branch creation operation.

use crate::github::{error::GitHubError, util::repo_route, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct CreateRefBody<'a> {
    #[serde(rename = "ref")]
    reference: &'a str,
    sha: &'a str,
}

/// Reference returned by `POST /repos/{owner}/{repo}/git/refs`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedRef {
    /// Fully qualified ref, e.g. `refs/heads/alice-branch`
    #[serde(rename = "ref")]
    pub reference: String,
    pub object: RefTarget,
}

/// Object a ref points at.
#[derive(Debug, Clone, Deserialize)]
pub struct RefTarget {
    pub sha: String,
}

/// Create a new branch from an existing SHA.
///
/// The branch name should not include the "refs/heads/" prefix.
/// GitHub answers 422 ("Reference already exists") for duplicates.
pub(crate) fn create_branch(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    branch: impl Into<String>,
    sha: impl Into<String>,
) -> AsyncTask<Result<CreatedRef, GitHubError>> {
    let (owner, repo, branch, sha) = (owner.into(), repo.into(), branch.into(), sha.into());
    spawn_task("create_branch", async move {
        let full_ref = format!("refs/heads/{branch}");
        let body = CreateRefBody {
            reference: &full_ref,
            sha: &sha,
        };
        let created: Result<CreatedRef, octocrab::Error> = inner
            .post(format!("{}/git/refs", repo_route(&owner, &repo)), Some(&body))
            .await;
        created.map_err(GitHubError::from)
    })
}
