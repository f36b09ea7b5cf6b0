//! Enrollment configuration
//!
//! Layered as defaults, then an optional TOML file, then environment variables.
//! CLI flags are applied last by the binary.

use crate::enrollment::error::EnrollmentError;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

pub const DEFAULT_OWNER: &str = "cwadyalkar";
pub const DEFAULT_REPO: &str = "github_actions_test";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_BASE_BRANCH: &str = "main";
pub const DEFAULT_FILE_PATH: &str = "task.js";
pub const DEFAULT_BRANCH_SUFFIX: &str = "-branch";
pub const DEFAULT_PLACEHOLDER: &str = "// Write your code here";

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const OWNER_ENV: &str = "ENROLL_REPO_OWNER";
pub const REPO_ENV: &str = "ENROLL_REPO_NAME";
pub const API_BASE_ENV: &str = "ENROLL_API_BASE";

/// Repository identity, credentials and workflow constants.
#[derive(Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnrollmentConfig {
    /// Owner of the task repository
    pub owner: String,
    /// Name of the task repository
    pub repo: String,
    /// Personal access token with `repo` scope
    pub token: Option<String>,
    /// REST API base URL
    pub api_base: String,
    /// Branch new enrollment branches start from
    pub base_branch: String,
    /// File the submission is written to
    pub file_path: String,
    /// Appended to the identifier before sanitizing
    pub branch_suffix: String,
    /// Initial draft content, restored after a successful submission
    pub placeholder: String,
}

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
            token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            base_branch: DEFAULT_BASE_BRANCH.to_string(),
            file_path: DEFAULT_FILE_PATH.to_string(),
            branch_suffix: DEFAULT_BRANCH_SUFFIX.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl fmt::Debug for EnrollmentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnrollmentConfig")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("base_branch", &self.base_branch)
            .field("file_path", &self.file_path)
            .field("branch_suffix", &self.branch_suffix)
            .field("placeholder", &self.placeholder)
            .finish()
    }
}

impl EnrollmentConfig {
    /// Defaults with the given repository and token.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Point the workflow at a different API endpoint.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, EnrollmentError> {
        toml::from_str(source).map_err(|e| EnrollmentError::Config(format!("invalid config: {e}")))
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EnrollmentError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            EnrollmentError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    /// Overlay values from the process environment.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary variable lookup. Empty values are ignored.
    #[must_use]
    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = get(TOKEN_ENV) {
            self.token = Some(token);
        }
        if let Some(owner) = get(OWNER_ENV) {
            self.owner = owner;
        }
        if let Some(repo) = get(REPO_ENV) {
            self.repo = repo;
        }
        if let Some(api_base) = get(API_BASE_ENV) {
            self.api_base = api_base;
        }
        self
    }

    /// Token, if one is configured and non-blank.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Reject configurations the workflow cannot run with.
    pub fn validate(&self) -> Result<(), EnrollmentError> {
        if self.token().is_none() {
            return Err(EnrollmentError::Config(format!(
                "no access token configured (set {TOKEN_ENV} or `token` in the config file)"
            )));
        }
        for (name, value) in [
            ("owner", &self.owner),
            ("repo", &self.repo),
            ("api_base", &self.api_base),
            ("base_branch", &self.base_branch),
            ("file_path", &self.file_path),
        ] {
            if value.trim().is_empty() {
                return Err(EnrollmentError::Config(format!("`{name}` must not be empty")));
            }
        }
        Ok(())
    }
}
