use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Public Router Module
///
/// Endpoints that need no session: monitoring and the role router lookups used by
/// post-authentication navigation.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Load balancer check.
        .route("/health", get(|| async { "ok" }))
        // GET /api/routes/default?role=...
        .route("/api/routes/default", get(handlers::get_default_route))
        // GET /api/routes/dashboard?role=...
        .route("/api/routes/dashboard", get(handlers::get_dashboard_route))
}
