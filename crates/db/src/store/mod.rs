//! Auth store seam.
//!
//! The session manager talks to persistence exclusively through the
//! [`AuthStore`] trait so the rotation state machine can be unit tested
//! against [`MemoryAuthStore`] and run in production against
//! [`PgAuthStore`].

pub mod memory;
pub mod pg;

pub use memory::MemoryAuthStore;
pub use pg::PgAuthStore;

use async_trait::async_trait;

use evermore_core::types::DbId;

use crate::models::admin_user::AdminUser;
use crate::models::login_log::CreateLoginLog;
use crate::models::refresh_token::{CreateRefreshToken, RefreshToken};

/// Errors surfaced by an [`AuthStore`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence operations required by the admin session manager.
#[async_trait]
pub trait AuthStore: Send + Sync {
    /// Look up an admin user by exact username.
    async fn find_user_by_username(&self, username: &str)
        -> Result<Option<AdminUser>, StoreError>;

    /// Look up an admin user by id.
    async fn find_user_by_id(&self, id: DbId) -> Result<Option<AdminUser>, StoreError>;

    /// Set the user's `last_login_at` to now.
    async fn touch_last_login(&self, id: DbId) -> Result<(), StoreError>;

    /// Insert a refresh-token ledger row.
    async fn insert_refresh_token(
        &self,
        input: &CreateRefreshToken,
    ) -> Result<RefreshToken, StoreError>;

    /// Find a non-revoked, non-expired ledger row by token hash.
    async fn find_active_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, StoreError>;

    /// Set `revoked_at` on a single ledger row. Returns `true` if this call
    /// performed the revocation (single-use guard for concurrent rotations).
    async fn revoke_refresh_token(&self, id: DbId) -> Result<bool, StoreError>;

    /// Revoke every active token for a user. Returns the revoked count.
    async fn revoke_all_for_user(&self, user_id: DbId) -> Result<u64, StoreError>;

    /// Append a login-attempt audit row.
    async fn log_attempt(&self, input: &CreateLoginLog) -> Result<(), StoreError>;
}
