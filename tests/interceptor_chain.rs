//! End-to-end interceptor behavior through the axum router.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use tower::ServiceExt;

use rest_interceptor::interceptor::builtin::RequireHeader;
use rest_interceptor::interceptor::{interceptor_fn, InterceptorChain, PassThrough};
use rest_interceptor::{HttpMethod, InterceptorRegistry, RestPattern};

mod common;

fn counter() -> (Arc<AtomicUsize>, impl Fn() -> usize) {
    let calls = Arc::new(AtomicUsize::new(0));
    let reader = calls.clone();
    (calls, move || reader.load(Ordering::SeqCst))
}

#[tokio::test]
async fn test_no_interceptors_reaches_handler() {
    let app = common::app(InterceptorChain::empty());

    let res = app.oneshot(common::request("GET", "/foo")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(common::body_string(res).await, r#"{"method":"GET","path":"/foo"}"#);
}

#[tokio::test]
async fn test_matching_request_runs_logic() {
    let (calls, count) = counter();
    let mut registry = InterceptorRegistry::new();
    registry
        .add_interceptor(
            "count",
            interceptor_fn(move |_req, _res| {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(true)
            }),
        )
        .add_patterns([RestPattern::of("/foo", HttpMethod::Get)]);
    let app = common::app(registry.build());

    let res = app.clone().oneshot(common::request("GET", "/foo")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(count(), 1);

    // Wrong method, wrong path: bypassed, handler still reached
    let res = app.clone().oneshot(common::request("POST", "/foo")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let res = app.oneshot(common::request("GET", "/bar")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(count(), 1);
}

#[tokio::test]
async fn test_exclude_takes_precedence() {
    let (calls, count) = counter();
    let mut registry = InterceptorRegistry::new();
    registry
        .add_interceptor(
            "deny",
            interceptor_fn(move |_req, res| {
                calls.fetch_add(1, Ordering::SeqCst);
                *res.status_mut() = StatusCode::FORBIDDEN;
                Ok(false)
            }),
        )
        .add_patterns([RestPattern::of("/foo", HttpMethod::Get)])
        .exclude_patterns([RestPattern::of("/foo", HttpMethod::Get)]);
    let app = common::app(registry.build());

    let res = app.oneshot(common::request("GET", "/foo")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(count(), 0);
}

#[tokio::test]
async fn test_pre_flight_always_bypasses() {
    let mut registry = InterceptorRegistry::new();
    registry
        .add_interceptor("api-key", RequireHeader::new("x-api-key".parse().unwrap()))
        .add_patterns([RestPattern::from_template("/**")]);
    let app = common::app(registry.build());

    let res = app.clone().oneshot(common::pre_flight("/foo")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Plain OPTIONS is intercepted like any other method
    let res = app.oneshot(common::request("OPTIONS", "/foo")).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_halting_interceptor_response_is_sent() {
    let mut registry = InterceptorRegistry::new();
    registry
        .add_interceptor("api-key", RequireHeader::new("x-api-key".parse().unwrap()))
        .add_patterns([RestPattern::builder().path("/api/**").get().post().build()])
        .exclude_patterns([RestPattern::from_template("/api/health")]);
    let app = common::app(registry.build());

    let res = app.clone().oneshot(common::request("GET", "/api/items/1")).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(common::body_string(res).await, "Missing x-api-key header");

    let authorized = axum::http::Request::builder()
        .method("GET")
        .uri("/api/items/1")
        .header("x-api-key", "secret")
        .body(axum::body::Body::empty())
        .unwrap();
    let res = app.clone().oneshot(authorized).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.clone().oneshot(common::request("GET", "/api/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // DELETE is not in the include set
    let res = app.oneshot(common::request("DELETE", "/api/items/1")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_interceptor_error_becomes_server_error() {
    let mut registry = InterceptorRegistry::new();
    registry
        .add_interceptor("broken", interceptor_fn(|_req, _res| Err("lookup failed".into())))
        .add_patterns([RestPattern::from_template("/**")]);
    let app = common::app(registry.build());

    let res = app.oneshot(common::request("GET", "/anything")).await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_order_controls_execution() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut registry = InterceptorRegistry::new();
    for (name, order) in [("audit", 10), ("auth", -5), ("metrics", 10)] {
        let log = log.clone();
        registry
            .add_interceptor(
                name,
                interceptor_fn(move |_req, _res| {
                    log.lock().unwrap().push(name);
                    Ok(true)
                }),
            )
            .add_patterns([RestPattern::from_template("/**")])
            .order(order);
    }
    let app = common::app(registry.build());

    let res = app.oneshot(common::request("PUT", "/x")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(*log.lock().unwrap(), vec!["auth", "audit", "metrics"]);
}

#[tokio::test]
async fn test_swapped_chain_applies_to_next_request() {
    let shared = InterceptorChain::empty().into_shared();
    let app = rest_interceptor::HttpServer::build_router(
        &rest_interceptor::config::ServerConfig::default(),
        shared.clone(),
    );

    let res = app.clone().oneshot(common::request("GET", "/api")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let mut registry = InterceptorRegistry::new();
    registry
        .add_interceptor(
            "lockdown",
            interceptor_fn(|_req, res| {
                *res.status_mut() = StatusCode::SERVICE_UNAVAILABLE;
                Ok(false)
            }),
        )
        .add_patterns([RestPattern::from_template("/**")]);
    shared.store(Arc::new(registry.build()));

    let res = app.clone().oneshot(common::request("GET", "/api")).await.unwrap();
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    shared.store(Arc::new(InterceptorChain::empty()));
    let res = app.oneshot(common::request("GET", "/api")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_pass_through_registration() {
    let mut registry = InterceptorRegistry::new();
    registry
        .add_interceptor("noop", PassThrough)
        .add_patterns([RestPattern::from_template("/**")]);
    let app = common::app(registry.build());

    let res = app.oneshot(common::request("HEAD", "/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
