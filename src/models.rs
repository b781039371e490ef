use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};

// --- Query Parameters ---

/// RoleQuery
///
/// Query string for the route lookup endpoints. `role` may be omitted.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoleQuery {
    /// Role name, compared case-insensitively.
    pub role: Option<String>,
}

/// AccessQuery
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AccessQuery {
    /// The ERP path the caller wants to open, e.g. `/sales/quotes`.
    pub path: String,
}

// --- Response Schemas ---

/// RouteResolution
///
/// Answer of the role router: the route a role lands on.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, PartialEq)]
#[ts(export)]
pub struct RouteResolution {
    /// The role as supplied by the caller (not normalized).
    pub role: Option<String>,
    pub route: String,
}

/// AccessResponse
///
/// Whether the authenticated user may open `path`. When `allowed` is false,
/// `redirect_to` names the route the frontend should navigate to instead.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, PartialEq)]
#[ts(export)]
pub struct AccessResponse {
    pub path: String,
    pub allowed: bool,
    pub redirect_to: Option<String>,
}
