//! Admin maintenance operations.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use evermore_db::repositories::RefreshTokenRepo;

use crate::auth::session::AdminPrincipal;
use crate::error::AppResult;
use crate::state::AppState;

/// Result of `POST /admin/maintenance/token-sweep`.
#[derive(Debug, Serialize)]
pub struct SweepResult {
    pub deleted: u64,
}

/// POST /api/v1/admin/maintenance/token-sweep
///
/// Delete refresh-token ledger rows more than 30 days past expiry. Recently
/// expired and revoked rows stay behind as the rotation audit trail.
pub async fn token_sweep(
    State(state): State<AppState>,
    principal: AdminPrincipal,
) -> AppResult<Json<SweepResult>> {
    let deleted = RefreshTokenRepo::cleanup_expired(&state.pool).await?;
    tracing::info!(user_id = principal.user_id, deleted, "Refresh-token ledger swept");
    Ok(Json(SweepResult { deleted }))
}
