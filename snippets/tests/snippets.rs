//! Snippet operations exercised against the live mock server.

use classroom_core::{ApiError, CourseState, CoursesClient};
use classroom_snippets::{create_course, get_course, update_course, Executor, SnippetError};

/// Boot the mock server on a random port and return its base URL.
async fn start_mock() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { mock_server::run(listener).await.unwrap() });
    format!("http://{addr}")
}

#[tokio::test]
async fn snippet_lifecycle() {
    let base = start_mock().await;
    let client = CoursesClient::new(&base);
    let exec = Executor::new("test-token");

    let created = create_course(&client, &exec).await.unwrap();
    assert_eq!(created.name, "10th Grade Biology");
    assert_eq!(created.section.as_deref(), Some("Period 2"));
    assert_eq!(created.room.as_deref(), Some("301"));
    assert_eq!(created.course_state, CourseState::Provisioned);
    assert_ne!(created.owner_id, "me");
    assert!(!created.id.is_empty());

    let fetched = get_course(&client, &exec, &created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, created.name);

    let updated = update_course(&client, &exec, &created.id).await.unwrap();
    assert_eq!(updated.section.as_deref(), Some("Period 3"));
    assert_eq!(updated.room.as_deref(), Some("302"));
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.creation_time, created.creation_time);
}

#[tokio::test]
async fn get_course_unknown_id_is_not_found() {
    let base = start_mock().await;
    let client = CoursesClient::new(&base);
    let exec = Executor::new("test-token");

    let err = get_course(&client, &exec, "123456").await.unwrap_err();
    assert!(matches!(err, SnippetError::Api(ApiError::NotFound)));
}

#[tokio::test]
async fn snippets_require_a_token() {
    let base = start_mock().await;
    let client = CoursesClient::new(&base);
    let exec = Executor::new("");

    let err = create_course(&client, &exec).await.unwrap_err();
    assert!(matches!(err, SnippetError::Api(ApiError::Unauthenticated)));
}
