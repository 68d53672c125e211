//! Stateless request builder and response parser for the courses API.
//!
//! # Design
//! `CoursesClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; the caller runs the HTTP round-trip in between and is
//! responsible for attaching its bearer token. The client stays
//! deterministic, credential-free and free of I/O dependencies.

use crate::error::{ApiError, ErrorEnvelope};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Course, NewCourse};

/// Synchronous, stateless client for the `v1/courses` resource.
///
/// `base_url` is the service root — `https://classroom.googleapis.com` for
/// the live service, or wherever a mock is listening. A trailing slash is
/// tolerated.
#[derive(Debug, Clone)]
pub struct CoursesClient {
    base_url: String,
}

impl CoursesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_create_course(&self, input: &NewCourse) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/v1/courses", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_get_course(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/v1/courses/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// The update payload is the full course resource, normally obtained
    /// from `parse_get_course` with the mutable fields edited in place.
    /// Server-assigned fields are sent along and ignored by the service.
    pub fn build_update_course(&self, id: &str, course: &Course) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(course).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/v1/courses/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_create_course(&self, response: HttpResponse) -> Result<Course, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_get_course(&self, response: HttpResponse) -> Result<Course, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_update_course(&self, response: HttpResponse) -> Result<Course, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// Map non-200 status codes to the appropriate `ApiError` variant.
///
/// The service answers 200 to every successful courses call, creation
/// included, so a single expected status covers all three operations.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        401 => Err(ApiError::Unauthenticated),
        404 => Err(ApiError::NotFound),
        status => match serde_json::from_str::<ErrorEnvelope>(&response.body) {
            Ok(envelope) => Err(ApiError::Api {
                status,
                reason: envelope.error.status,
                message: envelope.error.message,
            }),
            Err(_) => Err(ApiError::Http {
                status,
                body: response.body.clone(),
            }),
        },
    }
}
