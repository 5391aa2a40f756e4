//! Handlers for the `/auth` resource (login, logout, session lookup).
//!
//! Tokens travel exclusively in HTTP-only cookies; response bodies carry
//! only safe user info.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::CookieJar;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use evermore_db::models::admin_user::AdminUserResponse;
use evermore_db::models::login_log::LoginLog;
use evermore_db::repositories::LoginLogRepo;

use crate::auth::cookies::{self, CookieOp, REFRESH_COOKIE};
use crate::auth::session::AdminPrincipal;
use crate::error::AppResult;
use crate::middleware::auth::client_info;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response. The tokens themselves are in cookies.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: AdminUserResponse,
}

/// Query parameters for `GET /admin/login-logs`.
#[derive(Debug, Deserialize)]
pub struct LoginLogParams {
    /// Filter by attempted username (catches attempts against accounts that
    /// do not exist). Defaults to the caller's own history.
    pub username: Option<String>,
    pub limit: Option<i64>,
}

/// Current-session response for `GET /auth/session`.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user_id: i64,
    pub username: String,
    pub role: String,
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. On success, sets the access and
/// refresh cookies and returns the admin's public info.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<LoginRequest>,
) -> AppResult<Response> {
    let client = client_info(&headers);

    let user = state
        .sessions
        .verify_login(&input.username, &input.password, &client)
        .await?;

    let issued = state.sessions.issue_session(&user, &client).await?;

    let refresh_max_age = (issued.refresh_expires_at - Utc::now()).num_seconds().max(0);
    let ops = vec![
        CookieOp::SetAccess {
            value: issued.access_token,
            max_age_secs: state.config.jwt.access_token_expiry_mins * 60,
        },
        CookieOp::SetRefresh {
            value: issued.refresh_token,
            max_age_secs: refresh_max_age,
        },
    ];

    tracing::info!(user_id = user.id, username = %user.username, "Admin logged in");

    let mut response = Json(LoginResponse {
        user: AdminUserResponse::from(&user),
    })
    .into_response();
    cookies::apply_ops(response.headers_mut(), &ops, state.config.cookie_secure);
    Ok(response)
}

/// POST /api/v1/auth/logout
///
/// Revoke the presented refresh token (best-effort) and clear both cookies.
/// Idempotent: stale or missing cookies still produce 204.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let refresh = jar.get(REFRESH_COOKIE).map(|c| c.value().to_string());
    let ops = state.sessions.logout(refresh.as_deref()).await;

    let mut response = StatusCode::NO_CONTENT.into_response();
    cookies::apply_ops(response.headers_mut(), &ops, state.config.cookie_secure);
    response
}

/// POST /api/v1/auth/logout-all
///
/// Revoke every active refresh token the admin holds (all devices), then
/// clear the caller's cookies. Runs behind the admin guard.
pub async fn logout_all(
    State(state): State<AppState>,
    principal: AdminPrincipal,
) -> AppResult<Response> {
    let (revoked, ops) = state.sessions.logout_all(principal.user_id).await?;
    tracing::info!(user_id = principal.user_id, revoked, "Admin logged out everywhere");

    let mut response = StatusCode::NO_CONTENT.into_response();
    cookies::apply_ops(response.headers_mut(), &ops, state.config.cookie_secure);
    Ok(response)
}

/// GET /api/v1/admin/login-logs
///
/// The login audit trail, newest first. `?username=` filters by attempted
/// username (including attempts against nonexistent accounts); without it,
/// the caller's own history is returned.
pub async fn login_logs(
    State(state): State<AppState>,
    principal: AdminPrincipal,
    Query(params): Query<LoginLogParams>,
) -> AppResult<Json<Vec<LoginLog>>> {
    let limit = params.limit.unwrap_or(50).clamp(1, 200);
    let logs = match params.username {
        Some(username) => LoginLogRepo::list_for_username(&state.pool, &username, limit).await?,
        None => LoginLogRepo::list_for_user(&state.pool, principal.user_id, limit).await?,
    };
    Ok(Json(logs))
}

/// GET /api/v1/auth/session
///
/// Return the authenticated principal. Runs behind the admin guard, so a
/// near-expiry access token is silently refreshed by the middleware.
pub async fn session(principal: AdminPrincipal) -> Json<SessionResponse> {
    Json(SessionResponse {
        user_id: principal.user_id,
        username: principal.username,
        role: principal.role,
    })
}
