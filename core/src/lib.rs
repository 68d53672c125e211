//! I/O-free API client core for the Classroom courses service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the
//! three `v1/courses` operations — create, get and update — without
//! touching the network (host-does-IO pattern). The caller executes the
//! round-trip and attaches its OAuth2 bearer token, keeping this crate
//! deterministic, credential-free and trivially testable.
//!
//! # Design
//! - `CoursesClient` is stateless — it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O and auth boundary is
//!   explicit.
//! - Error responses are mapped through the Google error envelope, with
//!   dedicated variants for 404 and 401.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::CoursesClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Course, CourseState, NewCourse};
