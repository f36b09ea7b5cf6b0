//! In-memory enrollment session.
//!
//! Replaces the independent UI flags (modal open, branch created, editor open,
//! task completed) with a single state value so impossible combinations cannot occur.

use crate::enrollment::branch_name::derive_branch_name;
use crate::enrollment::error::ValidationError;

/// Where a participant is in the enrollment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nothing started yet
    #[default]
    Idle,
    /// Identifier being entered
    Enrolling,
    /// Branch exists remotely, editor not yet open
    BranchCreated,
    /// Editor open, draft not yet submitted
    Editing,
    /// At least one draft committed; editing may continue
    Submitted,
}

impl SessionState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Enrolling => "enrolling",
            SessionState::BranchCreated => "branch-created",
            SessionState::Editing => "editing",
            SessionState::Submitted => "submitted",
        }
    }

    /// True once the remote branch has been provisioned.
    #[must_use]
    pub fn branch_created(self) -> bool {
        matches!(
            self,
            SessionState::BranchCreated | SessionState::Editing | SessionState::Submitted
        )
    }

    #[must_use]
    pub fn editor_open(self) -> bool {
        matches!(self, SessionState::Editing | SessionState::Submitted)
    }
}

/// One participant's enrollment, held only for the life of the process.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    identifier: String,
    draft: String,
    placeholder: String,
}

impl Session {
    /// Fresh session in `Idle` with the draft set to `placeholder`.
    pub fn new(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        Self {
            state: SessionState::Idle,
            identifier: String::new(),
            draft: placeholder.clone(),
            placeholder,
        }
    }

    /// Session for a branch provisioned earlier, with the editor open.
    pub fn resume(identifier: impl Into<String>, placeholder: impl Into<String>) -> Self {
        let mut session = Self::new(placeholder);
        session.identifier = identifier.into();
        session.state = SessionState::Editing;
        session
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    #[must_use]
    pub fn branch_created(&self) -> bool {
        self.state.branch_created()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.state == SessionState::Submitted
    }

    /// Derived branch name, or `None` while no identifier is set.
    #[must_use]
    pub fn branch_name(&self, suffix: &str) -> Option<String> {
        (!self.identifier.is_empty()).then(|| derive_branch_name(&self.identifier, suffix))
    }

    /// Idle -> Enrolling
    pub fn begin_enrollment(&mut self) -> Result<(), ValidationError> {
        self.expect_state(SessionState::Idle, "begin enrollment")?;
        self.state = SessionState::Enrolling;
        Ok(())
    }

    /// Enrolling -> Idle; the identifier is discarded.
    pub fn cancel_enrollment(&mut self) -> Result<(), ValidationError> {
        self.expect_state(SessionState::Enrolling, "cancel enrollment")?;
        self.identifier.clear();
        self.state = SessionState::Idle;
        Ok(())
    }

    /// Only accepted while enrolling.
    pub fn set_identifier(&mut self, identifier: impl Into<String>) -> Result<(), ValidationError> {
        self.expect_state(SessionState::Enrolling, "change the GitHub ID")?;
        self.identifier = identifier.into();
        Ok(())
    }

    /// BranchCreated -> Editing
    pub fn open_editor(&mut self) -> Result<(), ValidationError> {
        self.expect_state(SessionState::BranchCreated, "open the editor")?;
        self.state = SessionState::Editing;
        Ok(())
    }

    /// Replace the draft. Requires the editor to be open.
    pub fn edit_draft(&mut self, content: impl Into<String>) -> Result<(), ValidationError> {
        if !self.state.editor_open() {
            return Err(self.invalid("edit the draft"));
        }
        self.draft = content.into();
        Ok(())
    }

    pub(crate) fn expect_state(
        &self,
        expected: SessionState,
        action: &'static str,
    ) -> Result<(), ValidationError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    pub(crate) fn mark_branch_created(&mut self) {
        self.state = SessionState::BranchCreated;
    }

    pub(crate) fn mark_submitted(&mut self) {
        self.state = SessionState::Submitted;
        self.draft = self.placeholder.clone();
    }

    fn invalid(&self, action: &'static str) -> ValidationError {
        ValidationError::InvalidTransition {
            action,
            state: self.state.as_str(),
        }
    }
}
