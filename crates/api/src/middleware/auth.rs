//! Cookie-based admin guard.
//!
//! [`require_admin`] runs the session state machine on the request's cookies,
//! injects the [`AdminPrincipal`] into request extensions for handlers to
//! extract, and applies whatever cookie ops the machine decided (fresh
//! cookies after a silent refresh, clearing cookies on rejection) to the
//! response.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;

use evermore_core::error::CoreError;

use crate::auth::cookies::{self, ACCESS_COOKIE, REFRESH_COOKIE};
use crate::auth::session::{AdminPrincipal, AuthOutcome, ClientInfo};
use crate::error::AppError;
use crate::state::AppState;

/// Extract audit metadata from request headers.
///
/// The client IP honours the first `X-Forwarded-For` entry when the server
/// sits behind a reverse proxy.
pub fn client_info(headers: &HeaderMap) -> ClientInfo {
    let ip_address = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string());

    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    ClientInfo {
        ip_address,
        user_agent,
    }
}

/// Middleware guarding the admin route subtree.
pub async fn require_admin(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let access = jar.get(ACCESS_COOKIE).map(|c| c.value().to_string());
    let refresh = jar.get(REFRESH_COOKIE).map(|c| c.value().to_string());
    let client = client_info(request.headers());

    let outcome = state
        .sessions
        .require_auth(access.as_deref(), refresh.as_deref(), &client)
        .await;

    match outcome {
        AuthOutcome::Authenticated { principal, cookies } => {
            request.extensions_mut().insert(principal);
            let mut response = next.run(request).await;
            cookies::apply_ops(response.headers_mut(), &cookies, state.config.cookie_secure);
            response
        }
        AuthOutcome::Rejected { cookies } => {
            let mut response =
                AppError::Core(CoreError::Unauthorized("Authentication required".into()))
                    .into_response();
            cookies::apply_ops(response.headers_mut(), &cookies, state.config.cookie_secure);
            response
        }
    }
}

impl<S> FromRequestParts<S> for AdminPrincipal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminPrincipal>()
            .cloned()
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Authentication required".into()))
            })
    }
}
