//! CORS pre-flight detection.

use axum::body::Body;
use axum::http::{header, Method, Request};

/// Returns true for a browser CORS pre-flight: an `OPTIONS` request that
/// carries both `Origin` and `Access-Control-Request-Method`.
pub fn is_pre_flight_request(request: &Request<Body>) -> bool {
    request.method() == Method::OPTIONS
        && request.headers().contains_key(header::ORIGIN)
        && request
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}
