//! Selective request interception for axum services.
//!
//! Interceptors run custom pre-handler logic only for requests matching a
//! set of method + Ant-style path patterns, minus an exclusion list. CORS
//! pre-flight requests always bypass them.

pub mod config;
pub mod http;
pub mod interceptor;
pub mod observability;
pub mod pattern;

pub use config::AppConfig;
pub use http::HttpServer;
pub use interceptor::{Interceptor, InterceptorChain, InterceptorRegistry, RestInterceptor, SharedChain};
pub use pattern::{HttpMethod, InvalidMethodError, RestPattern, RestPatterns};
