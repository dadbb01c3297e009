//! Per-request decision gate.
//!
//! # Decision Order
//! ```text
//! pre-flight?          → bypass (PreFlight)
//! exclude any match?   → bypass (Excluded)
//! include none match?  → bypass (NotIncluded)
//! otherwise            → run Interceptor::process, return its result
//! ```
//!
//! A bypass always continues to the handler. The gate never denies on its
//! own; only the plugged-in logic can stop a request.

use std::fmt;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use tower::BoxError;

use crate::interceptor::cors::is_pre_flight_request;
use crate::observability::metrics;
use crate::pattern::{HttpMethod, RestPatterns};

/// Custom logic run for requests that pass the gate.
pub trait Interceptor: Send + Sync {
    /// Returns `Ok(true)` to continue to the handler. On `Ok(false)` the
    /// request stops here and `response` is sent as-is.
    fn process(&self, _request: &Request<Body>, _response: &mut Response) -> Result<bool, BoxError> {
        Ok(true)
    }
}

/// Logic that always continues.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl Interceptor for PassThrough {}

/// Adapts a closure into an [`Interceptor`]; see [`interceptor_fn`].
#[derive(Clone)]
pub struct FnInterceptor<F>(F);

impl<F> Interceptor for FnInterceptor<F>
where
    F: Fn(&Request<Body>, &mut Response) -> Result<bool, BoxError> + Send + Sync,
{
    fn process(&self, request: &Request<Body>, response: &mut Response) -> Result<bool, BoxError> {
        (self.0)(request, response)
    }
}

pub fn interceptor_fn<F>(f: F) -> FnInterceptor<F>
where
    F: Fn(&Request<Body>, &mut Response) -> Result<bool, BoxError> + Send + Sync,
{
    FnInterceptor(f)
}

/// Framework-supplied pre-flight predicate.
pub type PreFlightCheck = Arc<dyn Fn(&Request<Body>) -> bool + Send + Sync>;

/// Outcome of the gate for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    PreFlight,
    Excluded,
    NotIncluded,
    Execute,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::PreFlight => "pre_flight",
            Decision::Excluded => "excluded",
            Decision::NotIncluded => "not_included",
            Decision::Execute => "execute",
        }
    }

    pub fn is_bypass(&self) -> bool {
        *self != Decision::Execute
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An interceptor scoped by include and exclude patterns.
///
/// Patterns are configured during startup and only read afterwards, so the
/// gate is shared across request tasks without locking.
#[derive(Clone)]
pub struct RestInterceptor {
    name: String,
    include: RestPatterns,
    exclude: RestPatterns,
    pre_flight: PreFlightCheck,
    logic: Arc<dyn Interceptor>,
}

impl RestInterceptor {
    pub fn new(name: impl Into<String>, logic: impl Interceptor + 'static) -> Self {
        Self::from_arc(name, Arc::new(logic))
    }

    pub fn from_arc(name: impl Into<String>, logic: Arc<dyn Interceptor>) -> Self {
        Self {
            name: name.into(),
            include: RestPatterns::empty(),
            exclude: RestPatterns::empty(),
            pre_flight: Arc::new(is_pre_flight_request),
            logic,
        }
    }

    /// Replace the CORS pre-flight predicate.
    pub fn with_pre_flight<F>(mut self, check: F) -> Self
    where
        F: Fn(&Request<Body>) -> bool + Send + Sync + 'static,
    {
        self.pre_flight = Arc::new(check);
        self
    }

    /// Append to the include list.
    pub fn add_patterns(&mut self, patterns: &RestPatterns) {
        self.include.add_all(patterns);
    }

    /// Append to the exclude list.
    pub fn exclude_patterns(&mut self, patterns: &RestPatterns) {
        self.exclude.add_all(patterns);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn include(&self) -> &RestPatterns {
        &self.include
    }

    pub fn exclude(&self) -> &RestPatterns {
        &self.exclude
    }

    pub fn decide(&self, request: &Request<Body>) -> Decision {
        if (self.pre_flight)(request) {
            return Decision::PreFlight;
        }
        // Methods outside the enumeration match no pattern.
        let Ok(method) = HttpMethod::try_from(request.method()) else {
            return Decision::NotIncluded;
        };
        let path = request.uri().path();

        if self.exclude.any_matches(method, path) {
            Decision::Excluded
        } else if self.include.none_matches(method, path) {
            Decision::NotIncluded
        } else {
            Decision::Execute
        }
    }

    /// Run the gate and, if it passes, the custom logic. Errors from the
    /// logic are returned untouched.
    pub fn pre_handle(&self, request: &Request<Body>, response: &mut Response) -> Result<bool, BoxError> {
        let decision = self.decide(request);
        metrics::record_decision(&self.name, decision);

        if decision.is_bypass() {
            tracing::trace!(
                interceptor = %self.name,
                method = %request.method(),
                path = %request.uri().path(),
                %decision,
                "Bypassing interceptor"
            );
            return Ok(true);
        }

        tracing::debug!(
            interceptor = %self.name,
            method = %request.method(),
            path = %request.uri().path(),
            "Running interceptor"
        );
        self.logic.process(request, response)
    }
}

impl fmt::Debug for RestInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestInterceptor")
            .field("name", &self.name)
            .field("include", &self.include)
            .field("exclude", &self.exclude)
            .finish_non_exhaustive()
    }
}
