//! Course resource DTOs for the Classroom courses API.
//!
//! # Design
//! Wire form is camelCase JSON matching the `v1/courses` REST schema.
//! Optional fields are skipped when absent rather than serialized as null,
//! since the service treats a null and a missing field differently. The
//! mock-server crate defines its own copies of these types; integration
//! tests catch schema drift between the two.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a course.
///
/// A course is created in `Provisioned` unless the payload asks for
/// `Active`; the remaining states only appear on fetched courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseState {
    Provisioned,
    Active,
    Archived,
    Declined,
    Suspended,
}

/// A course as returned by the service.
///
/// `enrollment_code`, `alternate_link`, `creation_time` and `update_time`
/// are assigned server-side; they may be sent back in an update payload but
/// the service ignores them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

/// Request payload for creating a course.
///
/// Only `name` and `owner_id` are required. `owner_id` accepts the `"me"`
/// alias, which the service resolves to the caller's numeric profile id.
/// Leaving `course_state` unset creates the course in `PROVISIONED`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_state: Option<CourseState>,
}
