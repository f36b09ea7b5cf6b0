//! Enrollment workflow: branch provisioning and task file submission.

use crate::enrollment::branch_name::derive_branch_name;
use crate::enrollment::config::EnrollmentConfig;
use crate::enrollment::error::{EnrollmentError, ValidationError};
use crate::enrollment::session::{Session, SessionState};
use crate::github::{
    CreateOrUpdateFileRequest, FileLookup, GitHubClient, GitHubError, GitHubResult, join_task,
};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};

/// Branch created for a participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedBranch {
    /// Short branch name, without `refs/heads/`
    pub name: String,
    /// Fully qualified ref as reported by GitHub
    pub reference: String,
    /// Commit the branch was created from
    pub base_sha: String,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub branch: String,
    pub path: String,
    /// Commit created by the write
    pub commit_sha: String,
    /// Blob SHA of the overwritten file, `None` when the file was created
    pub previous_sha: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    #[must_use]
    pub fn created(&self) -> bool {
        self.previous_sha.is_none()
    }
}

/// Runs the enrollment calls against one task repository.
#[derive(Clone, Debug)]
pub struct EnrollmentWorkflow {
    client: GitHubClient,
    config: EnrollmentConfig,
}

impl EnrollmentWorkflow {
    /// Validate `config` and build an authenticated client for it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: EnrollmentConfig) -> Result<Self, EnrollmentError> {
        config.validate()?;
        let token = config.token().unwrap_or_default().to_string();
        let client = GitHubClient::builder()
            .personal_token(token)
            .base_uri(config.api_base.clone())
            .build()
            .map_err(|e| EnrollmentError::Config(e.to_string()))?;
        Ok(Self::with_client(config, client))
    }

    /// Use an already configured client.
    #[must_use]
    pub fn with_client(config: EnrollmentConfig, client: GitHubClient) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn config(&self) -> &EnrollmentConfig {
        &self.config
    }

    #[must_use]
    pub fn new_session(&self) -> Session {
        Session::new(self.config.placeholder.clone())
    }

    /// Session for a participant whose branch already exists.
    #[must_use]
    pub fn resume_session(&self, identifier: impl Into<String>) -> Session {
        Session::resume(identifier, self.config.placeholder.clone())
    }

    #[must_use]
    pub fn branch_name(&self, identifier: &str) -> String {
        derive_branch_name(identifier, &self.config.branch_suffix)
    }

    /// Start a session for `identifier` and provision its branch.
    pub async fn enroll(
        &self,
        identifier: impl Into<String>,
    ) -> Result<(Session, ProvisionedBranch), EnrollmentError> {
        let mut session = self.new_session();
        session.begin_enrollment()?;
        session.set_identifier(identifier)?;
        let branch = self.provision_branch(&mut session).await?;
        Ok((session, branch))
    }

    /// Create the participant's branch from the tip of the base branch.
    ///
    /// Requires the session to be enrolling with a non-empty identifier. On success
    /// the session ends up `Editing`; on failure it is left untouched.
    pub async fn provision_branch(
        &self,
        session: &mut Session,
    ) -> Result<ProvisionedBranch, EnrollmentError> {
        session.expect_state(SessionState::Enrolling, "create a branch")?;
        if session.identifier().is_empty() {
            return Err(ValidationError::IdentifierRequired.into());
        }

        let branch = self.branch_name(session.identifier());
        let EnrollmentConfig {
            owner,
            repo,
            base_branch,
            ..
        } = &self.config;

        info!("Provisioning branch {branch} in {owner}/{repo} from {base_branch}");

        let created = async {
            let head = join_task(self.client.get_branch(owner, repo, base_branch)).await?;
            debug!("{base_branch} is at {}", head.commit.sha);
            join_task(
                self.client
                    .create_branch(owner, repo, &branch, &head.commit.sha),
            )
            .await
        }
        .await
        .map_err(|e| {
            warn!("Failed to create branch {branch}: {e}");
            EnrollmentError::BranchCreation(e)
        })?;

        session.mark_branch_created();
        session.open_editor()?;
        info!("Created {}", created.reference);

        Ok(ProvisionedBranch {
            name: branch,
            reference: created.reference,
            base_sha: created.object.sha,
        })
    }

    /// Commit the session draft to the task file on the participant's branch.
    ///
    /// Local preconditions are checked before any request is sent. On success
    /// the session is `Submitted` and its draft is reset to the placeholder.
    pub async fn submit(&self, session: &mut Session) -> Result<SubmissionReceipt, EnrollmentError> {
        if !session.branch_created() {
            return Err(ValidationError::NotEnrolled.into());
        }
        if session.identifier().is_empty() {
            return Err(ValidationError::IdentifierMissing.into());
        }

        let identifier = session.identifier().to_string();
        let branch = self.branch_name(&identifier);
        let path = self.config.file_path.clone();

        let result = async {
            let previous_sha = self.lookup_file(&branch).await?.sha().map(str::to_string);
            match &previous_sha {
                Some(sha) => debug!("{path} exists on {branch} at {sha}"),
                None => debug!("{path} does not exist on {branch}, creating it"),
            }

            let request = CreateOrUpdateFileRequest {
                owner: self.config.owner.clone(),
                repo: self.config.repo.clone(),
                path: path.clone(),
                message: format!("Task submission by {identifier}"),
                content: session.draft().to_string(),
                branch: Some(branch.clone()),
                sha: previous_sha.clone(),
            };
            let outcome = join_task(self.client.create_or_update_file(request)).await?;
            Ok::<_, GitHubError>((outcome, previous_sha))
        }
        .await;

        let (outcome, previous_sha) = result.map_err(|e| {
            warn!("Submission to {branch} failed: {e}");
            EnrollmentError::from_submission(e)
        })?;

        session.mark_submitted();
        info!("Submitted {path} to {branch} as {}", outcome.commit.sha);

        Ok(SubmissionReceipt {
            branch,
            path,
            commit_sha: outcome.commit.sha,
            previous_sha,
            submitted_at: Utc::now(),
        })
    }

    async fn lookup_file(&self, branch: &str) -> GitHubResult<FileLookup> {
        join_task(self.client.get_file_contents(
            &self.config.owner,
            &self.config.repo,
            &self.config.file_path,
            Some(branch.to_string()),
        ))
        .await
    }
}
