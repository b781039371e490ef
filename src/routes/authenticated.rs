use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Authenticated Router Module
///
/// Every handler here receives a validated `AuthUser`; the router is wrapped in
/// the session middleware by `create_router`.
pub fn authenticated_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // GET /auth/landing
        // Redirects the signed-in user to the default route for their role.
        .route("/auth/landing", get(handlers::landing))
        // GET /api/access?path=...
        // Role-based guard check for an ERP module area.
        .route("/api/access", get(handlers::check_access))
}
