//! Router assembly: `/api` prefix plus the HTTP middleware stack.

mod book;
mod common;

pub use book::book_routes;
pub use common::{common_routes, SERVICE_NAME};

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// Maximum accepted request body. Enforced when `JsonPayload` buffers the body.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Routes mounted under `/api`, without middleware.
pub fn api_routes(state: AppState) -> Router {
    Router::new().nest(
        "/api",
        Router::new()
            .merge(common_routes(state.clone()))
            .merge(book_routes(state)),
    )
}

/// Full application: routes plus CORS, body limit, timeout and request tracing.
pub fn app(state: AppState, request_timeout: Duration) -> Router {
    api_routes(state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::map_response(timeout_body))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// `TimeoutLayer` answers 408 with an empty body; give it the `{error}` shape.
async fn timeout_body(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return AppError::Timeout.into_response();
    }
    response
}
