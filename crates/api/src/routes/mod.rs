pub mod health;

use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers;
use crate::middleware::auth::require_admin;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public, sets cookies)
/// /auth/logout                         logout (public, clears cookies)
/// /auth/session                        current principal (admin cookie)
/// /auth/logout-all                     revoke all sessions (admin cookie)
///
/// /content                             all content sections (public)
/// /content/{section}                   one section by name (public)
/// /guestbook                           list visible, create (public)
/// /rsvp                                submit response (public)
///
/// /admin/content/{section}             replace section payload (PUT)
/// /admin/login-logs                    login audit trail
/// /admin/guestbook                     list all including hidden
/// /admin/guestbook/{id}                moderate (PATCH), delete
/// /admin/rsvp                          list responses
/// /admin/rsvp/summary                  attendance totals
/// /admin/maintenance/token-sweep       sweep old ledger rows (POST)
/// ```
///
/// `/auth/session`, `/auth/logout-all`, and everything under `/admin` run
/// behind the cookie guard, which also performs silent refresh.
pub fn api_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/content", get(handlers::content::list))
        .route("/content/{section}", get(handlers::content::get_section))
        .route(
            "/guestbook",
            get(handlers::guestbook::list_public).post(handlers::guestbook::create),
        )
        .route("/rsvp", post(handlers::rsvp::create));

    let guarded = Router::new()
        .route("/auth/session", get(handlers::auth::session))
        .route("/auth/logout-all", post(handlers::auth::logout_all))
        .route("/admin/content/{section}", put(handlers::content::update_section))
        .route("/admin/login-logs", get(handlers::auth::login_logs))
        .route("/admin/guestbook", get(handlers::guestbook::list_all))
        .route(
            "/admin/guestbook/{id}",
            patch(handlers::guestbook::moderate).delete(handlers::guestbook::delete),
        )
        .route("/admin/rsvp", get(handlers::rsvp::list))
        .route("/admin/rsvp/summary", get(handlers::rsvp::summary))
        .route(
            "/admin/maintenance/token-sweep",
            post(handlers::maintenance::token_sweep),
        )
        .layer(axum::middleware::from_fn_with_state(state, require_admin));

    public.merge(guarded)
}
