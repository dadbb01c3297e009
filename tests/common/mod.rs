//! Shared utilities for integration tests.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;

use rest_interceptor::config::ServerConfig;
use rest_interceptor::{HttpServer, InterceptorChain};

/// Build the full server router around `chain`.
pub fn app(chain: InterceptorChain) -> Router {
    HttpServer::build_router(&ServerConfig::default(), chain.into_shared())
}

pub fn request(method: &str, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

/// Browser-style CORS pre-flight for `path`.
#[allow(dead_code)]
pub fn pre_flight(path: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri(path)
        .header("Origin", "https://app.example.com")
        .header("Access-Control-Request-Method", "POST")
        .body(Body::empty())
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
