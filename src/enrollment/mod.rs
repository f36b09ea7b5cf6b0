//! Participant enrollment: branch provisioning and task submission.

pub mod branch_name;
pub mod config;
pub mod error;
pub mod session;
pub mod workflow;

pub use branch_name::derive_branch_name;
pub use config::EnrollmentConfig;
pub use error::{EnrollmentError, ValidationError};
pub use session::{Session, SessionState};
pub use workflow::{EnrollmentWorkflow, ProvisionedBranch, SubmissionReceipt};
