//! Interceptor logics selectable from configuration.

use axum::body::Body;
use axum::http::{HeaderName, Request, StatusCode};
use axum::response::Response;
use tower::BoxError;

use crate::interceptor::gate::Interceptor;

/// Rejects requests that lack a header, with `401 Unauthorized`.
#[derive(Debug, Clone)]
pub struct RequireHeader {
    header: HeaderName,
}

impl RequireHeader {
    pub fn new(header: HeaderName) -> Self {
        Self { header }
    }
}

impl Interceptor for RequireHeader {
    fn process(&self, request: &Request<Body>, response: &mut Response) -> Result<bool, BoxError> {
        let present = request
            .headers()
            .get(&self.header)
            .map(|value| !value.is_empty())
            .unwrap_or(false);

        if present {
            return Ok(true);
        }

        tracing::warn!(
            header = %self.header,
            path = %request.uri().path(),
            "Missing required header"
        );
        *response.status_mut() = StatusCode::UNAUTHORIZED;
        *response.body_mut() = Body::from(format!("Missing {} header", self.header));
        Ok(false)
    }
}

/// Logs each intercepted request at `info` and continues.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRequests;

impl Interceptor for LogRequests {
    fn process(&self, request: &Request<Body>, _response: &mut Response) -> Result<bool, BoxError> {
        tracing::info!(
            method = %request.method(),
            path = %request.uri().path(),
            "Intercepted request"
        );
        Ok(true)
    }
}
