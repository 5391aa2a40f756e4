//! Login-attempt audit log model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use evermore_core::types::{DbId, Timestamp};

/// An append-only row from the `admin_login_logs` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LoginLog {
    pub id: DbId,
    /// Null when the attempted username does not match any account.
    pub admin_user_id: Option<DbId>,
    pub username: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub success: bool,
    /// Operator-facing reason for a failed attempt. Never shown to end users.
    pub failure_reason: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for appending a login-attempt row.
pub struct CreateLoginLog {
    pub admin_user_id: Option<DbId>,
    pub username: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub success: bool,
    pub failure_reason: Option<String>,
}
