//! In-memory stand-in for the Classroom courses service.
//!
//! Implements the three `v1/courses` endpoints with Google-shaped success
//! and error payloads: bearer-token gatekeeping, `"me"` owner resolution,
//! server-assigned ids, enrollment codes, links and timestamps, and
//! full-resource updates that ignore read-only fields. DTOs are defined
//! here independently of the core crate; integration tests catch drift.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Profile id the `"me"` owner alias resolves to.
pub const ME_PROFILE_ID: &str = "109876543210987654321";

/// Assigned course ids count up from here, mimicking the service's long
/// opaque digit strings.
const ID_BASE: u64 = 632_550_000_000;

const NOT_FOUND_MESSAGE: &str = "Requested entity was not found.";
const UNAUTHENTICATED_MESSAGE: &str = "Request had invalid authentication credentials. \
     Expected OAuth 2 access token, login cookie or other valid authentication credential.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseState {
    Provisioned,
    Active,
    Archived,
    Declined,
    Suspended,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    pub owner_id: String,
    pub course_state: CourseState,
    pub enrollment_code: String,
    pub alternate_link: String,
    pub creation_time: String,
    pub update_time: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub name: String,
    pub section: Option<String>,
    pub description_heading: Option<String>,
    pub description: Option<String>,
    pub room: Option<String>,
    pub owner_id: String,
    pub course_state: Option<CourseState>,
}

/// Update payload. Clients send the whole fetched course back; only the
/// fields listed here are applied, so id, owner and the server-assigned
/// fields in the payload are ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUpdate {
    pub name: String,
    pub section: Option<String>,
    pub description_heading: Option<String>,
    pub description: Option<String>,
    pub room: Option<String>,
    pub course_state: Option<CourseState>,
}

#[derive(Default)]
pub struct MockState {
    courses: RwLock<HashMap<String, Course>>,
    next_id: AtomicU64,
}

impl MockState {
    fn assign_id(&self) -> String {
        (ID_BASE + self.next_id.fetch_add(1, Ordering::Relaxed)).to_string()
    }
}

pub type Db = Arc<MockState>;

pub fn app() -> Router {
    let state: Db = Arc::new(MockState::default());
    Router::new()
        .route("/v1/courses", post(create_course))
        .route("/v1/courses/{id}", get(get_course).put(update_course))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// --- Google error envelope ---

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
    status: String,
}

#[derive(Serialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

fn api_error(code: StatusCode, status: &str, message: &str) -> Response {
    let envelope = ErrorEnvelope {
        error: ErrorBody {
            code: code.as_u16(),
            message: message.to_string(),
            status: status.to_string(),
        },
    };
    (code, Json(envelope)).into_response()
}

/// Every courses endpoint requires a non-empty bearer token. The token is
/// not validated beyond its shape; this is a mock, not an authorizer.
fn require_bearer(headers: &HeaderMap) -> Result<(), Response> {
    let present = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| !token.trim().is_empty());
    if present {
        Ok(())
    } else {
        Err(api_error(
            StatusCode::UNAUTHORIZED,
            "UNAUTHENTICATED",
            UNAUTHENTICATED_MESSAGE,
        ))
    }
}

fn rfc3339_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Short join code in the style of the real service.
fn enrollment_code() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..7].to_string()
}

// --- handlers ---

async fn create_course(
    State(state): State<Db>,
    headers: HeaderMap,
    Json(input): Json<NewCourse>,
) -> Response {
    if let Err(response) = require_bearer(&headers) {
        return response;
    }
    match input.course_state {
        None | Some(CourseState::Provisioned) | Some(CourseState::Active) => {}
        Some(_) => {
            return api_error(
                StatusCode::BAD_REQUEST,
                "INVALID_ARGUMENT",
                "courseState must be ACTIVE or PROVISIONED at creation time.",
            )
        }
    }

    let id = state.assign_id();
    let now = rfc3339_now();
    let owner_id = if input.owner_id == "me" {
        ME_PROFILE_ID.to_string()
    } else {
        input.owner_id
    };
    let course = Course {
        id: id.clone(),
        name: input.name,
        section: input.section,
        description_heading: input.description_heading,
        description: input.description,
        room: input.room,
        owner_id,
        course_state: input.course_state.unwrap_or(CourseState::Provisioned),
        enrollment_code: enrollment_code(),
        alternate_link: format!("https://classroom.google.com/c/{id}"),
        creation_time: now.clone(),
        update_time: now,
    };
    state.courses.write().await.insert(id, course.clone());
    tracing::debug!(id = %course.id, name = %course.name, "course created");
    Json(course).into_response()
}

async fn get_course(
    State(state): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(response) = require_bearer(&headers) {
        return response;
    }
    let courses = state.courses.read().await;
    match courses.get(&id) {
        Some(course) => Json(course).into_response(),
        None => api_error(StatusCode::NOT_FOUND, "NOT_FOUND", NOT_FOUND_MESSAGE),
    }
}

async fn update_course(
    State(state): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(input): Json<CourseUpdate>,
) -> Response {
    if let Err(response) = require_bearer(&headers) {
        return response;
    }
    let mut courses = state.courses.write().await;
    let Some(course) = courses.get_mut(&id) else {
        return api_error(StatusCode::NOT_FOUND, "NOT_FOUND", NOT_FOUND_MESSAGE);
    };
    course.name = input.name;
    course.section = input.section;
    course.description_heading = input.description_heading;
    course.description = input.description;
    course.room = input.room;
    if let Some(course_state) = input.course_state {
        course.course_state = course_state;
    }
    course.update_time = rfc3339_now();
    tracing::debug!(id = %course.id, "course updated");
    Json(course.clone()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        Course {
            id: "632550000000".to_string(),
            name: "10th Grade Biology".to_string(),
            section: Some("Period 2".to_string()),
            description_heading: None,
            description: None,
            room: Some("301".to_string()),
            owner_id: ME_PROFILE_ID.to_string(),
            course_state: CourseState::Provisioned,
            enrollment_code: "ab3cd9e".to_string(),
            alternate_link: "https://classroom.google.com/c/632550000000".to_string(),
            creation_time: "2026-08-06T12:00:00.000000Z".to_string(),
            update_time: "2026-08-06T12:00:00.000000Z".to_string(),
        }
    }

    #[test]
    fn course_serializes_to_camel_case() {
        let json = serde_json::to_value(course()).unwrap();
        assert_eq!(json["ownerId"], ME_PROFILE_ID);
        assert_eq!(json["courseState"], "PROVISIONED");
        assert_eq!(json["enrollmentCode"], "ab3cd9e");
        assert!(json.get("owner_id").is_none());
    }

    #[test]
    fn course_skips_absent_optional_fields() {
        let json = serde_json::to_value(course()).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("descriptionHeading").is_none());
    }

    #[test]
    fn new_course_requires_name_and_owner() {
        let result: Result<NewCourse, _> =
            serde_json::from_str(r#"{"section":"Period 2","ownerId":"me"}"#);
        assert!(result.is_err());
        let result: Result<NewCourse, _> = serde_json::from_str(r#"{"name":"Biology"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn new_course_state_is_optional() {
        let input: NewCourse =
            serde_json::from_str(r#"{"name":"Biology","ownerId":"me"}"#).unwrap();
        assert!(input.course_state.is_none());
    }

    #[test]
    fn course_update_ignores_server_assigned_fields() {
        let raw = r#"{
            "id": "632550000000",
            "name": "10th Grade Biology",
            "section": "Period 3",
            "room": "302",
            "ownerId": "109876543210987654321",
            "courseState": "PROVISIONED",
            "enrollmentCode": "ab3cd9e",
            "alternateLink": "https://classroom.google.com/c/632550000000",
            "creationTime": "2026-08-06T12:00:00.000000Z",
            "updateTime": "2026-08-06T12:00:00.000000Z"
        }"#;
        let update: CourseUpdate = serde_json::from_str(raw).unwrap();
        assert_eq!(update.section.as_deref(), Some("Period 3"));
        assert_eq!(update.room.as_deref(), Some("302"));
    }

    #[test]
    fn course_state_rejects_unknown_values() {
        let result: Result<CourseState, _> = serde_json::from_str(r#""OPEN""#);
        assert!(result.is_err());
    }
}
