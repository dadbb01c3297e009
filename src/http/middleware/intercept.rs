//! Interceptor Middleware.
//! Runs the interceptor chain before the handler.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::interceptor::SharedChain;

/// Mount with `axum::middleware::from_fn_with_state(chain, intercept)`.
pub async fn intercept(
    State(chain): State<SharedChain>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let mut response = Response::default();

    // The snapshot guard is dropped before awaiting the handler.
    let outcome = chain.load().pre_handle(&request, &mut response);

    match outcome {
        Ok(true) => next.run(request).await,
        Ok(false) => response,
        Err(e) => {
            tracing::error!(
                method = %request.method(),
                path = %request.uri().path(),
                error = %e,
                "Interceptor failed"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "Interceptor failed").into_response()
        }
    }
}
