use axum::{
    extract::{Request, State},
    http::{HeaderMap, Uri, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::migrations::{PathRewriter, RedirectDecision};

/// legacy_redirects
///
/// Runs before routing for every request. Paths the rewriter maps to a new location
/// get a `307 Temporary Redirect`; everything else continues untouched.
pub async fn legacy_redirects(
    State(rewriter): State<PathRewriter>,
    request: Request,
    next: Next,
) -> Response {
    match rewriter.evaluate(request.uri().path()) {
        RedirectDecision::Redirect(target) => {
            let location = absolute_location(request.uri(), request.headers(), &target);
            Redirect::temporary(&location).into_response()
        }
        RedirectDecision::PassThrough => next.run(request).await,
    }
}

/// absolute_location
///
/// Resolves `target` against the origin of the original request: the request URI's
/// own scheme and authority when present, else the `Host` header (scheme from
/// `X-Forwarded-Proto`, default `http`). Without any host the bare path is returned.
pub fn absolute_location(uri: &Uri, headers: &HeaderMap, target: &str) -> String {
    if let (Some(scheme), Some(authority)) = (uri.scheme_str(), uri.authority()) {
        return format!("{scheme}://{authority}{target}");
    }

    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty());

    match host {
        Some(host) => {
            let scheme = headers
                .get("x-forwarded-proto")
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.split(',').next())
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .unwrap_or("http");
            format!("{scheme}://{host}{target}")
        }
        None => target.to_string(),
    }
}
