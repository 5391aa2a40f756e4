//! Admin user entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use evermore_core::types::{DbId, Timestamp};

/// Full admin user row from the `admin_users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`AdminUserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe admin user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct AdminUserResponse {
    pub id: DbId,
    pub username: String,
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
}

impl From<&AdminUser> for AdminUserResponse {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
            is_active: user.is_active,
            last_login_at: user.last_login_at,
        }
    }
}

/// DTO for creating a new admin user (seed tooling and tests).
pub struct CreateAdminUser {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}
