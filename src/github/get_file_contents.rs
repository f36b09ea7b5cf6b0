//! GitHub file metadata lookup operation.

use crate::github::error::{GitHubError, GitHubResult};
use crate::github::util::{repo_route, spawn_task};
use crate::runtime::AsyncTask;
use octocrab::{FromResponse, Octocrab};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct ContentMetadata {
    sha: String,
}

/// Outcome of looking up a single file on a ref.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileLookup {
    /// File exists; `sha` is the blob SHA needed to overwrite it.
    Found { sha: String },
    /// GitHub answered 404 for this path on this ref.
    NotFound,
}

impl FileLookup {
    /// Blob SHA when the file exists.
    #[must_use]
    pub fn sha(&self) -> Option<&str> {
        match self {
            FileLookup::Found { sha } => Some(sha),
            FileLookup::NotFound => None,
        }
    }
}

/// Look up file metadata at `path` on `reference`.
///
/// Any 404 is folded into [`FileLookup::NotFound`], whatever its body; every
/// other failure is an error.
pub(crate) fn get_file_contents(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    path: impl Into<String>,
    reference: Option<String>,
) -> AsyncTask<Result<FileLookup, GitHubError>> {
    let (owner, repo, path) = (owner.into(), repo.into(), path.into());
    let mut route = format!("{}/contents/{}", repo_route(&owner, &repo), path);
    if let Some(r) = reference {
        route.push_str("?ref=");
        route.push_str(&urlencoding::encode(&r));
    }
    spawn_task("get_file_contents", lookup(inner, route))
}

async fn lookup(inner: Arc<Octocrab>, route: String) -> GitHubResult<FileLookup> {
    let response = inner._get(route).await?;
    // Status first: octocrab only reports a status for errors whose body parses.
    if response.status().as_u16() == 404 {
        return Ok(FileLookup::NotFound);
    }
    let response = octocrab::map_github_error(response).await?;
    let meta = ContentMetadata::from_response(response).await?;
    Ok(FileLookup::Found { sha: meta.sha })
}
