use crate::{
    access::{AccessDecision, AreaGuard},
    auth::AuthUser,
    models::{AccessQuery, AccessResponse, RoleQuery, RouteResolution},
    roles::RoleRoutes,
};
use axum::{
    Json,
    extract::{Query, State},
    response::Redirect,
};

/// get_default_route
///
/// [Public Route] Resolves the default landing route for a role. Called by
/// post-authentication navigation logic. Unknown or missing roles resolve to the
/// fallback route; this endpoint never fails.
#[utoipa::path(
    get,
    path = "/api/routes/default",
    params(RoleQuery),
    responses((status = 200, description = "Default route for the role", body = RouteResolution))
)]
pub async fn get_default_route(
    State(routes): State<RoleRoutes>,
    Query(RoleQuery { role }): Query<RoleQuery>,
) -> Json<RouteResolution> {
    let route = routes.default_route(role.as_deref()).to_string();
    Json(RouteResolution { role, route })
}

/// get_dashboard_route
///
/// [Public Route] Same mapping as `get_default_route`, for callers asking
/// specifically for a role's dashboard.
#[utoipa::path(
    get,
    path = "/api/routes/dashboard",
    params(RoleQuery),
    responses((status = 200, description = "Dashboard route for the role", body = RouteResolution))
)]
pub async fn get_dashboard_route(
    State(routes): State<RoleRoutes>,
    Query(RoleQuery { role }): Query<RoleQuery>,
) -> Json<RouteResolution> {
    let route = routes.dashboard_route(role.as_deref()).to_string();
    Json(RouteResolution { role, route })
}

/// landing
///
/// [Authenticated Route] Sends a signed-in user to the default route for the role
/// carried by their session.
#[utoipa::path(
    get,
    path = "/auth/landing",
    responses(
        (status = 307, description = "Redirect to the role's default route"),
        (status = 401, description = "No valid session")
    )
)]
pub async fn landing(
    AuthUser { id, role }: AuthUser,
    State(routes): State<RoleRoutes>,
) -> Redirect {
    let route = routes.default_route(role.as_deref());
    tracing::debug!(user_id = %id, role = ?role, route, "resolved landing route");
    Redirect::temporary(route)
}

/// check_access
///
/// [Authenticated Route] Tells the frontend whether the signed-in user's role may
/// open `path`. Paths outside every module area are reported as allowed. A refused
/// user with nowhere to go gets `allowed: false` and no `redirect_to`.
#[utoipa::path(
    get,
    path = "/api/access",
    params(AccessQuery),
    responses(
        (status = 200, description = "Access decision", body = AccessResponse),
        (status = 401, description = "No valid session")
    )
)]
pub async fn check_access(
    AuthUser { role, .. }: AuthUser,
    State(guard): State<AreaGuard>,
    Query(AccessQuery { path }): Query<AccessQuery>,
) -> Json<AccessResponse> {
    let (allowed, redirect_to) = match guard.check(role.as_deref(), &path) {
        AccessDecision::Unguarded | AccessDecision::Allowed => (true, None),
        AccessDecision::Redirect(target) => (false, Some(target.to_string())),
        AccessDecision::Denied => (false, None),
    };

    Json(AccessResponse {
        path,
        allowed,
        redirect_to,
    })
}
