//! Shared fixtures: a workflow pointed at a wiremock server and canned GitHub responses.

use github_enroll::{EnrollmentConfig, EnrollmentWorkflow};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const OWNER: &str = "cwadyalkar";
pub const REPO: &str = "github_actions_test";
pub const TOKEN: &str = "test-token";
pub const MAIN_SHA: &str = "aa218f56b14c9653891f9e74264a383fa43fefbd";
pub const PLACEHOLDER: &str = "// Write your code here";

pub fn repo_path(rest: &str) -> String {
    format!("/repos/{OWNER}/{REPO}{rest}")
}

pub fn workflow_for(server: &MockServer) -> EnrollmentWorkflow {
    workflow_at(&server.uri())
}

pub fn workflow_at(api_base: &str) -> EnrollmentWorkflow {
    let config = EnrollmentConfig::new(OWNER, REPO, TOKEN).with_api_base(api_base);
    EnrollmentWorkflow::new(config).expect("workflow should build")
}

/// GitHub-shaped error body.
pub fn github_error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "message": message,
        "documentation_url": "https://docs.github.com/rest"
    }))
}

pub async fn mount_main_branch(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(repo_path("/branches/main")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "main",
            "commit": { "sha": MAIN_SHA, "url": "https://api.github.com/commit" },
            "protected": false
        })))
        .mount(server)
        .await;
}

pub async fn mount_create_ref(server: &MockServer, branch: &str) {
    Mock::given(method("POST"))
        .and(path(repo_path("/git/refs")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "ref": format!("refs/heads/{branch}"),
            "node_id": "REF_1",
            "url": "https://api.github.com/ref",
            "object": { "type": "commit", "sha": MAIN_SHA, "url": "https://api.github.com/commit" }
        })))
        .mount(server)
        .await;
}

pub fn write_response(commit_sha: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "content": { "name": "task.js", "path": "task.js", "sha": "newblob" },
        "commit": { "sha": commit_sha, "message": "Task submission" }
    }))
}
