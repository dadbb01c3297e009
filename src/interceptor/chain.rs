//! Ordered, frozen set of interceptors.
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Stable sort by order: ties keep registration order
//! - Each entry carries its include templates as a method-agnostic path
//!   filter, checked before the full gate
//! - Reloads replace the whole chain through [`SharedChain`]

use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use tower::BoxError;

use crate::interceptor::gate::RestInterceptor;
use crate::interceptor::registry::InterceptorRegistration;
use crate::observability::metrics;
use crate::pattern::PathTemplate;

/// Chain handle that can be swapped atomically while serving traffic.
pub type SharedChain = Arc<ArcSwap<InterceptorChain>>;

#[derive(Debug)]
struct MappedInterceptor {
    interceptor: RestInterceptor,
    path_filter: Vec<PathTemplate>,
    order: i32,
}

impl MappedInterceptor {
    fn new(interceptor: RestInterceptor, order: i32) -> Self {
        let path_filter = interceptor
            .include()
            .paths()
            .into_iter()
            .map(PathTemplate::new)
            .collect();
        Self {
            interceptor,
            path_filter,
            order,
        }
    }

    /// An empty filter applies everywhere.
    fn applies_to(&self, path: &str) -> bool {
        self.path_filter.is_empty() || self.path_filter.iter().any(|t| t.matches(path))
    }
}

#[derive(Debug, Default)]
pub struct InterceptorChain {
    entries: Vec<MappedInterceptor>,
}

impl InterceptorChain {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_registrations(registrations: Vec<InterceptorRegistration>) -> Self {
        let mut entries: Vec<MappedInterceptor> = registrations
            .into_iter()
            .map(|registration| {
                let (interceptor, order) = registration.into_parts();
                MappedInterceptor::new(interceptor, order)
            })
            .collect();
        entries.sort_by_key(|entry| entry.order);
        Self { entries }
    }

    /// Run each applicable interceptor in order.
    ///
    /// Stops at the first interceptor that returns `Ok(false)` or an error;
    /// the error is returned as the interceptor produced it.
    pub fn pre_handle(&self, request: &Request<Body>, response: &mut Response) -> Result<bool, BoxError> {
        let path = request.uri().path();
        for entry in &self.entries {
            if !entry.applies_to(path) {
                continue;
            }
            if !entry.interceptor.pre_handle(request, response)? {
                tracing::debug!(
                    interceptor = %entry.interceptor.name(),
                    method = %request.method(),
                    path = %path,
                    status = %response.status(),
                    "Request halted by interceptor"
                );
                metrics::record_halted(entry.interceptor.name());
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Interceptor names in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.interceptor.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_shared(self) -> SharedChain {
        Arc::new(ArcSwap::from_pointee(self))
    }
}
