//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core crate builds
//! `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network — the caller (host) executes the round-trip and
//! attaches its OAuth2 credentials. Tokens therefore never enter this
//! crate, and every build/parse method is a pure function of its inputs.

/// HTTP method for a request. The courses operations only ever need these
/// three verbs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// An HTTP request described as plain data.
///
/// Built by `CoursesClient::build_*` methods. The caller executes this
/// request against the service, adding the `Authorization` header, and
/// returns the corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `CoursesClient::parse_*` methods for status mapping and
/// deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
