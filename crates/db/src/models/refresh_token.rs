//! Refresh-token ledger model and DTOs.

use sqlx::FromRow;

use evermore_core::types::{DbId, Timestamp};

/// A rotation-ledger row from the `admin_refresh_tokens` table.
///
/// Rows are only ever mutated to set `revoked_at`; the ledger doubles as an
/// audit trail of every session ever issued.
#[derive(Debug, Clone, FromRow)]
pub struct RefreshToken {
    pub id: DbId,
    pub admin_user_id: DbId,
    /// SHA-256 hex digest of the opaque secret. The raw secret is never stored.
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub ip_address: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new ledger row.
pub struct CreateRefreshToken {
    pub admin_user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub ip_address: Option<String>,
}
