//! Handlers for the guestbook (public feed + admin moderation).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use evermore_core::error::CoreError;
use evermore_core::types::DbId;
use evermore_db::models::guestbook::{CreateGuestbookEntry, GuestbookEntry};
use evermore_db::repositories::GuestbookRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Upper bound on message length; anything longer is rejected outright.
const MAX_MESSAGE_LENGTH: usize = 1000;

/// Request body for `PATCH /admin/guestbook/{id}`.
#[derive(Debug, Deserialize)]
pub struct ModerateRequest {
    pub hidden: bool,
}

/// POST /api/v1/guestbook
///
/// Public: leave a message for the couple.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGuestbookEntry>,
) -> AppResult<(StatusCode, Json<GuestbookEntry>)> {
    if input.author.trim().is_empty() {
        return Err(AppError::BadRequest("Author must not be empty".into()));
    }
    if input.message.trim().is_empty() {
        return Err(AppError::BadRequest("Message must not be empty".into()));
    }
    if input.message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Message must be at most {MAX_MESSAGE_LENGTH} characters"
        )));
    }

    let entry = GuestbookRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/guestbook
///
/// Public: visible entries, newest first.
pub async fn list_public(State(state): State<AppState>) -> AppResult<Json<Vec<GuestbookEntry>>> {
    let entries = GuestbookRepo::list_visible(&state.pool).await?;
    Ok(Json(entries))
}

/// GET /api/v1/admin/guestbook
///
/// Admin: every entry including hidden ones.
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<GuestbookEntry>>> {
    let entries = GuestbookRepo::list_all(&state.pool).await?;
    Ok(Json(entries))
}

/// PATCH /api/v1/admin/guestbook/{id}
///
/// Admin: hide or unhide an entry.
pub async fn moderate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ModerateRequest>,
) -> AppResult<Json<GuestbookEntry>> {
    let entry = GuestbookRepo::set_hidden(&state.pool, id, input.hidden)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "guestbook entry",
            id,
        }))?;
    Ok(Json(entry))
}

/// DELETE /api/v1/admin/guestbook/{id}
///
/// Admin: remove an entry permanently.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = GuestbookRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "guestbook entry",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
