//! Handlers for invitation content sections.

use axum::extract::{Path, State};
use axum::Json;

use evermore_db::models::site_content::{sections, SiteContent};
use evermore_db::repositories::SiteContentRepo;

use crate::auth::session::AdminPrincipal;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Sections editable through the admin console.
const KNOWN_SECTIONS: &[&str] = &[
    sections::PROFILE,
    sections::VENUE,
    sections::THEME,
    sections::BGM,
    sections::GALLERY,
];

/// GET /api/v1/content
///
/// Public: all content sections the invitation page renders.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SiteContent>>> {
    let rows = SiteContentRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/v1/content/{section}
///
/// Public: one section by name.
pub async fn get_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> AppResult<Json<SiteContent>> {
    let row = SiteContentRepo::find_by_section(&state.pool, &section)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("Unknown content section: {section}")))?;
    Ok(Json(row))
}

/// PUT /api/v1/admin/content/{section}
///
/// Replace one section's payload. The section name must be one of the known
/// editable sections.
pub async fn update_section(
    State(state): State<AppState>,
    principal: AdminPrincipal,
    Path(section): Path<String>,
    Json(data): Json<serde_json::Value>,
) -> AppResult<Json<SiteContent>> {
    if !KNOWN_SECTIONS.contains(&section.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unknown content section: {section}"
        )));
    }

    let row = SiteContentRepo::upsert(&state.pool, &section, &data).await?;
    tracing::info!(user_id = principal.user_id, section = %section, "Content section updated");
    Ok(Json(row))
}
