//! Branch provisioning against a fake GitHub API.

use super::common::{
    MAIN_SHA, PLACEHOLDER, github_error, mount_create_ref, mount_main_branch, repo_path,
    workflow_for,
};
use github_enroll::{EnrollmentError, SessionState, ValidationError};
use serde_json::json;
use wiremock::matchers::{body_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn enroll_creates_sanitized_branch_from_main() {
    let server = MockServer::start().await;
    mount_main_branch(&server).await;
    Mock::given(method("POST"))
        .and(path(repo_path("/git/refs")))
        .and(header_exists("authorization"))
        .and(body_json(json!({
            "ref": "refs/heads/alice2024-branch",
            "sha": MAIN_SHA
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "ref": "refs/heads/alice2024-branch",
            "object": { "sha": MAIN_SHA, "type": "commit" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let workflow = workflow_for(&server);
    let (session, branch) = workflow.enroll("alice!!2024").await.unwrap();

    assert_eq!(branch.name, "alice2024-branch");
    assert_eq!(branch.reference, "refs/heads/alice2024-branch");
    assert_eq!(branch.base_sha, MAIN_SHA);
    assert_eq!(session.state(), SessionState::Editing);
    assert!(session.branch_created());
    assert_eq!(session.identifier(), "alice!!2024");
    assert_eq!(session.draft(), PLACEHOLDER);
}

#[tokio::test]
async fn empty_identifier_is_rejected_without_network() {
    let server = MockServer::start().await;
    let workflow = workflow_for(&server);

    let mut session = workflow.new_session();
    session.begin_enrollment().unwrap();
    let err = workflow.provision_branch(&mut session).await.unwrap_err();

    assert!(matches!(
        err,
        EnrollmentError::Validation(ValidationError::IdentifierRequired)
    ));
    assert_eq!(err.user_message(), "GitHub ID is required");
    assert_eq!(session.state(), SessionState::Enrolling);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn provisioning_requires_enrolling_state() {
    let server = MockServer::start().await;
    let workflow = workflow_for(&server);

    let mut session = workflow.new_session();
    let err = workflow.provision_branch(&mut session).await.unwrap_err();

    assert!(err.is_local());
    assert_eq!(session.state(), SessionState::Idle);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_branch_is_a_generic_failure() {
    let server = MockServer::start().await;
    mount_main_branch(&server).await;
    Mock::given(method("POST"))
        .and(path(repo_path("/git/refs")))
        .respond_with(github_error(422, "Reference already exists"))
        .expect(1)
        .mount(&server)
        .await;

    let workflow = workflow_for(&server);
    let mut session = workflow.new_session();
    session.begin_enrollment().unwrap();
    session.set_identifier("bob").unwrap();

    let err = workflow.provision_branch(&mut session).await.unwrap_err();

    assert!(matches!(err, EnrollmentError::BranchCreation(_)));
    assert_eq!(
        err.user_message(),
        "Failed to create branch. Please check your GitHub permissions and the repository settings."
    );
    assert_eq!(session.state(), SessionState::Enrolling);
    assert!(!session.branch_created());
}

#[tokio::test]
async fn missing_base_branch_aborts_before_ref_creation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(repo_path("/branches/main")))
        .respond_with(github_error(404, "Branch not found"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(repo_path("/git/refs")))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let workflow = workflow_for(&server);
    let err = workflow.enroll("carol").await.unwrap_err();

    match err {
        EnrollmentError::BranchCreation(source) => assert_eq!(source.status_code(), Some(404)),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn identifier_of_only_symbols_uses_bare_suffix() {
    let server = MockServer::start().await;
    mount_main_branch(&server).await;
    mount_create_ref(&server, "-branch").await;

    let workflow = workflow_for(&server);
    let (_, branch) = workflow.enroll("!!!").await.unwrap();

    assert_eq!(branch.name, "-branch");
    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests
        .iter()
        .find(|r| r.method.as_str() == "POST")
        .expect("ref creation request")
        .body_json()
        .unwrap();
    assert_eq!(body["ref"], "refs/heads/-branch");
}
