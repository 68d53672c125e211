//! reqwest-backed executor for requests built by `classroom-core`.
//!
//! This is the "authenticated client handle" side of the host-does-IO
//! split: it owns the HTTP connection pool and the caller's OAuth2 access
//! token, and turns `HttpRequest` data into real round-trips. Acquiring
//! and refreshing the token is the caller's concern.

use classroom_core::{HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Clone)]
pub struct Executor {
    http: reqwest::Client,
    access_token: String,
}

impl Executor {
    pub fn new(access_token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_token: access_token.to_string(),
        }
    }

    /// Run one request to completion, attaching the bearer token.
    ///
    /// Non-2xx statuses come back as data for the core parsers to
    /// interpret; only transport failures surface as `Err`.
    pub async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, reqwest::Error> {
        let mut builder = match req.method {
            HttpMethod::Get => self.http.get(&req.path),
            HttpMethod::Post => self.http.post(&req.path),
            HttpMethod::Put => self.http.put(&req.path),
        };
        builder = builder.bearer_auth(&self.access_token);
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
