//! Tests for async task runtime primitives.

use github_enroll::github::{GitHubError, join_task, spawn_task};
use github_enroll::runtime::{AsyncTask, TaskDropped};
use tokio::sync::oneshot;

#[tokio::test]
async fn test_async_task_spawn() {
    let task = AsyncTask::spawn("answer", async { 42 });
    assert_eq!(task.operation(), "answer");
    assert_eq!(task.await.unwrap(), 42);
}

#[tokio::test]
async fn test_join_task_passes_result_through() {
    let task = spawn_task("get_branch", async { Ok::<_, GitHubError>("sha") });
    assert_eq!(join_task(task).await.unwrap(), "sha");
}

#[tokio::test]
async fn test_dropped_sender_names_operation() {
    let (tx, rx) = oneshot::channel::<Result<u8, GitHubError>>();
    drop(tx);
    let err = join_task(AsyncTask::from_receiver("create_branch", rx))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GitHubError::TaskFailed(TaskDropped {
            operation: "create_branch"
        })
    ));
}

#[tokio::test]
async fn test_panicking_operation_reports_task_dropped() {
    let task = AsyncTask::spawn("create_or_update_file", async {
        let size: u8 = "not a number".parse().expect("operation blew up");
        size
    });
    assert_eq!(
        task.await.unwrap_err(),
        TaskDropped {
            operation: "create_or_update_file"
        }
    );
}
