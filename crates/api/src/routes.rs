use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/dns/{*path}",
            get(handlers::remote_backend).post(handlers::remote_backend),
        )
        .route("/health", get(handlers::health_check))
        .route(
            "/status",
            get(handlers::get_status).put(handlers::replace_status),
        )
        .route(
            "/status/{id}",
            put(handlers::mark_unhealthy).delete(handlers::mark_healthy),
        )
        .with_state(state)
}
