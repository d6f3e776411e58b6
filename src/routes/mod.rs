use std::time::Duration;

use axum::{
    Router,
    http::{HeaderName, Method, Request, Response, Uri},
    middleware::{from_fn, from_fn_with_state},
    routing::get,
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::{
    error::AppError,
    middleware::{cors::cors, errors::payload_too_large},
    state::AppState,
};

pub mod auth;
pub mod cart;
pub mod doc;
pub mod health;
pub mod items;
pub mod orders;
pub mod params;

const REQUEST_ID_HEADER: &str = "x-request-id";
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

// Build the resource routers without binding state; it is provided in `create_app`.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/users", auth::router())
        .nest("/items", items::router())
        .nest("/carts", cart::router())
        .nest("/orders", orders::router())
}

/// Full application: routes, docs, CORS and the tower middleware stack.
pub fn create_app(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id(request)
            )
        })
        .on_request(|request: &Request<_>, _span: &tracing::Span| {
            tracing::info!(
                request_id = %request_id(request),
                method = %request.method(),
                uri = %request.uri(),
                "request started"
            );
        })
        .on_response(|response: &Response<_>, latency: Duration, _span: &tracing::Span| {
            tracing::info!(
                status = %response.status(),
                ms = %latency.as_millis(),
                "request finished"
            );
        });

    Router::new()
        .route("/", get(health::service_info))
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        // Must run before any `layer` call so the handler replaces the
        // unlayered default 405 of every route.
        .method_not_allowed_fallback(method_not_allowed)
        .layer(trace_layer)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(from_fn(payload_too_large))
        .layer(ConcurrencyLimitLayer::new(100))
        // Outermost, so limit rejections and preflights carry CORS headers too.
        .layer(from_fn_with_state(state.clone(), cors))
        .with_state(state)
}

fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = uri.path(), "no route matched");
    AppError::NotFound("Not Found".into())
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = uri.path(), "method not allowed");
    AppError::MethodNotAllowed("Method Not Allowed".into())
}
