//! Repositories API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::{BranchHead, CreatedRef, FileLookup, FileWriteOutcome};
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// Get a branch and its tip commit
    pub fn get_branch(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> AsyncTask<Result<BranchHead, GitHubError>> {
        crate::github::get_branch::get_branch(self.inner.clone(), owner, repo, branch)
    }

    /// Create a branch
    pub fn create_branch(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch_name: impl Into<String>,
        sha: impl Into<String>,
    ) -> AsyncTask<Result<CreatedRef, GitHubError>> {
        crate::github::create_branch::create_branch(
            self.inner.clone(),
            owner,
            repo,
            branch_name,
            sha,
        )
    }

    /// Look up file metadata; a missing file is `FileLookup::NotFound`
    pub fn get_file_contents(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
        ref_name: Option<String>,
    ) -> AsyncTask<Result<FileLookup, GitHubError>> {
        crate::github::get_file_contents::get_file_contents(
            self.inner.clone(),
            owner,
            repo,
            path,
            ref_name,
        )
    }

    /// Create or update a file
    #[must_use]
    pub fn create_or_update_file(
        &self,
        request: crate::github::CreateOrUpdateFileRequest,
    ) -> AsyncTask<Result<FileWriteOutcome, GitHubError>> {
        crate::github::create_or_update_file::create_or_update_file(self.inner.clone(), request)
    }
}
