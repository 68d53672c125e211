//! Classroom course snippets: create, get and update a course.
//!
//! Each function performs one remote call end to end — build the request
//! with `classroom-core`, execute it through the authenticated [`Executor`],
//! parse the response — and logs the outcome. Failures are logged and
//! returned to the caller; there is no retry or recovery.

pub mod executor;

pub use executor::Executor;

use classroom_core::{ApiError, Course, CourseState, CoursesClient, HttpRequest, HttpResponse, NewCourse};
use tracing::{error, info};

/// Errors surfaced by the snippet operations.
#[derive(Debug, thiserror::Error)]
pub enum SnippetError {
    #[error("the API returned an error: {0}")]
    Api(#[from] ApiError),

    #[error("transport failed: {0}")]
    Transport(#[from] reqwest::Error),
}

async fn execute_logged(exec: &Executor, request: HttpRequest) -> Result<HttpResponse, SnippetError> {
    exec.execute(request).await.map_err(|err| {
        error!("transport failed: {err}");
        SnippetError::Transport(err)
    })
}

fn log_api_error(err: ApiError) -> SnippetError {
    error!("the API returned an error: {err}");
    SnippetError::Api(err)
}

/// Creates a 10th Grade Biology course owned by the caller.
pub async fn create_course(client: &CoursesClient, exec: &Executor) -> Result<Course, SnippetError> {
    let input = NewCourse {
        name: "10th Grade Biology".to_string(),
        section: Some("Period 2".to_string()),
        description_heading: Some("Welcome to 10th Grade Biology".to_string()),
        description: Some(
            "We'll be learning about about the structure of living creatures from a \
             combination of textbooks, guest lectures, and lab work. Expect to be excited!"
                .to_string(),
        ),
        room: Some("301".to_string()),
        owner_id: "me".to_string(),
        course_state: Some(CourseState::Provisioned),
    };

    let request = client.build_create_course(&input).map_err(log_api_error)?;
    let response = execute_logged(exec, request).await?;
    let course = client.parse_create_course(response).map_err(log_api_error)?;
    info!("course created: {} ({})", course.name, course.id);
    Ok(course)
}

/// Retrieves a course by its id.
pub async fn get_course(
    client: &CoursesClient,
    exec: &Executor,
    id: &str,
) -> Result<Course, SnippetError> {
    let request = client.build_get_course(id);
    let response = execute_logged(exec, request).await?;
    let course = client.parse_get_course(response).map_err(log_api_error)?;
    info!("course {} found", course.name);
    Ok(course)
}

/// Moves a course to section "Period 3" and room "302".
///
/// Fetches the current resource first and sends the whole thing back with
/// the two fields edited, which is how the service's full-update call is
/// meant to be driven.
pub async fn update_course(
    client: &CoursesClient,
    exec: &Executor,
    id: &str,
) -> Result<Course, SnippetError> {
    let request = client.build_get_course(id);
    let response = execute_logged(exec, request).await?;
    let mut course = client.parse_get_course(response).map_err(log_api_error)?;

    course.section = Some("Period 3".to_string());
    course.room = Some("302".to_string());

    let request = client.build_update_course(id, &course).map_err(log_api_error)?;
    let response = execute_logged(exec, request).await?;
    let course = client.parse_update_course(response).map_err(log_api_error)?;
    info!("course {} updated", course.name);
    Ok(course)
}
