//! Postgres-backed [`AuthStore`] delegating to the repository layer.

use async_trait::async_trait;

use evermore_core::types::DbId;

use crate::models::admin_user::AdminUser;
use crate::models::login_log::CreateLoginLog;
use crate::models::refresh_token::{CreateRefreshToken, RefreshToken};
use crate::repositories::{AdminUserRepo, LoginLogRepo, RefreshTokenRepo};
use crate::store::{AuthStore, StoreError};
use crate::DbPool;

/// Production [`AuthStore`] over a sqlx connection pool.
#[derive(Clone)]
pub struct PgAuthStore {
    pool: DbPool,
}

impl PgAuthStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthStore for PgAuthStore {
    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUser>, StoreError> {
        Ok(AdminUserRepo::find_by_username(&self.pool, username).await?)
    }

    async fn find_user_by_id(&self, id: DbId) -> Result<Option<AdminUser>, StoreError> {
        Ok(AdminUserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn touch_last_login(&self, id: DbId) -> Result<(), StoreError> {
        Ok(AdminUserRepo::touch_last_login(&self.pool, id).await?)
    }

    async fn insert_refresh_token(
        &self,
        input: &CreateRefreshToken,
    ) -> Result<RefreshToken, StoreError> {
        Ok(RefreshTokenRepo::create(&self.pool, input).await?)
    }

    async fn find_active_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, StoreError> {
        Ok(RefreshTokenRepo::find_active_by_hash(&self.pool, token_hash).await?)
    }

    async fn revoke_refresh_token(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(RefreshTokenRepo::revoke(&self.pool, id).await?)
    }

    async fn revoke_all_for_user(&self, user_id: DbId) -> Result<u64, StoreError> {
        Ok(RefreshTokenRepo::revoke_all_for_user(&self.pool, user_id).await?)
    }

    async fn log_attempt(&self, input: &CreateLoginLog) -> Result<(), StoreError> {
        LoginLogRepo::create(&self.pool, input).await?;
        Ok(())
    }
}
