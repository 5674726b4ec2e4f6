//! Axum router configuration with middleware.
//!
//! All routes are under `/api/`. Middleware: CORS, tracing.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
///
/// With no configured origin the API answers any origin; browser
/// clients are the expected callers and the API carries no credentials.
pub fn build_router(state: AppState, allowed_origin: Option<&str>) -> Router {
    let cors = match allowed_origin {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(value) => CorsLayer::new()
                .allow_origin(value)
                .allow_methods(Any)
                .allow_headers(Any),
            Err(_) => {
                tracing::warn!(origin, "invalid allowed origin, answering any origin");
                permissive_cors()
            }
        },
        None => permissive_cors(),
    };

    Router::new()
        .route("/api/health", get(handlers::health::health))
        .route(
            "/api/messages",
            get(handlers::message::list_messages)
                .post(handlers::message::send_message)
                .delete(handlers::message::clear_messages),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
