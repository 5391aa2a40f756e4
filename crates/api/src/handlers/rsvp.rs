//! Handlers for RSVP submission and the admin attendance view.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use evermore_db::models::rsvp::{CreateRsvp, RsvpResponse};
use evermore_db::repositories::RsvpRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Attendance totals for `GET /admin/rsvp/summary`.
#[derive(Debug, Serialize)]
pub struct RsvpSummary {
    /// Responses received.
    pub responses: usize,
    /// Attending guests including companions.
    pub attending_total: i64,
}

/// POST /api/v1/rsvp
///
/// Public: submit an attendance response.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRsvp>,
) -> AppResult<(StatusCode, Json<RsvpResponse>)> {
    if input.guest_name.trim().is_empty() {
        return Err(AppError::BadRequest("Guest name must not be empty".into()));
    }
    if input.companions < 0 {
        return Err(AppError::BadRequest(
            "Companion count must not be negative".into(),
        ));
    }

    let response = RsvpRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/admin/rsvp
///
/// Admin: all responses, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<RsvpResponse>>> {
    let responses = RsvpRepo::list(&state.pool).await?;
    Ok(Json(responses))
}

/// GET /api/v1/admin/rsvp/summary
///
/// Admin: headcount for catering.
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<RsvpSummary>> {
    let responses = RsvpRepo::list(&state.pool).await?;
    let attending_total = RsvpRepo::count_attending(&state.pool).await?;
    Ok(Json(RsvpSummary {
        responses: responses.len(),
        attending_total,
    }))
}
