//! API module
//!
//! HTTP endpoints, middleware and error responses.

pub mod error;
pub mod middleware;
pub mod routes;

use axum::{http::HeaderName, routing::get, Router};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::service::PointService;

pub use error::ErrorResponse;
pub use routes::create_router;

/// Build the full application router with middleware and state
pub fn build_app(service: PointService) -> Router {
    let request_id = HeaderName::from_static(middleware::REQUEST_ID_HEADER);

    // Layers run outermost-last: request id -> trace -> logging -> handler
    Router::new()
        .route("/health", get(routes::health_check))
        .merge(create_router())
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .with_state(service)
}
