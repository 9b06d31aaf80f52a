use std::path::Path;

use axum::{
    middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the site router with all routes
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Pages
        .route("/", get(handlers::index))
        .route("/dashboard", get(handlers::dashboard))
        // Account forms
        .route("/user_register", get(handlers::index).post(handlers::user_register))
        .route("/user_login", get(handlers::index).post(handlers::user_login))
        // Similar products
        .route(
            "/get_recommendations",
            get(handlers::dashboard).post(handlers::get_recommendations),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
        .layer(
            // request IDs are assigned before the trace span is opened
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
}
