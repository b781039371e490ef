use axum::{
    Router,
    extract::{FromRef, Request},
    http::{HeaderName, StatusCode},
    middleware::{self, Next},
    response::Response,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod access;
pub mod auth;
pub mod config;
pub mod handlers;
pub mod migrations;
pub mod models;
pub mod redirects;
pub mod roles;

pub mod routes;
use auth::AuthUser;
use routes::{authenticated, public};

// --- Public Re-exports ---

pub use access::{AccessDecision, AreaGuard};
pub use config::AppConfig;
pub use migrations::{PathRewriter, RedirectDecision};
pub use roles::{Role, RoleRoutes, dashboard_route_for_role, default_route_for_role};

/// ApiDoc
///
/// OpenAPI document served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::get_default_route, handlers::get_dashboard_route,
        handlers::landing, handlers::check_access
    ),
    components(schemas(models::RouteResolution, models::AccessResponse)),
    tags((name = "ooh-erp-routing", description = "OOH ERP routing tier"))
)]
struct ApiDoc;

/// AppState
///
/// Shared, immutable state. The routing tables are plain values composed in here,
/// so tests can build a router over different tables without global setup.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub roles: RoleRoutes,
    pub rewriter: PathRewriter,
    pub guard: AreaGuard,
}

impl AppState {
    /// State with the ERP's built-in tables.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            roles: RoleRoutes::DEFAULT,
            rewriter: PathRewriter::CMS_CONTENT,
            guard: AreaGuard::DEFAULT,
        }
    }
}

// --- Axum FromRef Extractor Implementations ---

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for RoleRoutes {
    fn from_ref(app_state: &AppState) -> RoleRoutes {
        app_state.roles
    }
}

impl FromRef<AppState> for PathRewriter {
    fn from_ref(app_state: &AppState) -> PathRewriter {
        app_state.rewriter
    }
}

impl FromRef<AppState> for AreaGuard {
    fn from_ref(app_state: &AppState) -> AreaGuard {
        app_state.guard
    }
}

/// auth_middleware
///
/// Rejects the request with 401 unless an `AuthUser` can be extracted.
async fn auth_middleware(_auth_user: AuthUser, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// create_router
///
/// Assembles the routes, the legacy redirect middleware and the observability layers.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let x_request_id = HeaderName::from_static("x-request-id");

    let base_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public::public_routes())
        .merge(
            authenticated::authenticated_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        // Pages are rendered elsewhere; anything unrouted here is a 404.
        .fallback(|| async { StatusCode::NOT_FOUND })
        // Applied with `layer` (not `route_layer`) so legacy paths that no longer
        // have a route are still seen.
        .layer(middleware::from_fn_with_state(
            state.clone(),
            redirects::legacy_redirects,
        ))
        .with_state(state);

    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Span for one request, correlated by the `x-request-id` header.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
