//! In-memory [`AuthStore`] used by session-manager unit tests.
//!
//! Mirrors the Postgres semantics that matter to the state machine: active
//! lookups exclude revoked and expired rows, and revocation only succeeds
//! once per row. An operation counter lets tests assert that fast-path
//! authentication performs zero store calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use evermore_core::types::DbId;

use crate::models::admin_user::AdminUser;
use crate::models::login_log::{CreateLoginLog, LoginLog};
use crate::models::refresh_token::{CreateRefreshToken, RefreshToken};
use crate::store::{AuthStore, StoreError};

#[derive(Default)]
struct Inner {
    users: Vec<AdminUser>,
    tokens: Vec<RefreshToken>,
    logs: Vec<LoginLog>,
    next_id: DbId,
}

impl Inner {
    fn allocate_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory auth store with operation counting.
#[derive(Default)]
pub struct MemoryAuthStore {
    inner: Mutex<Inner>,
    operations: AtomicUsize,
}

impl MemoryAuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an admin user, returning the stored row.
    pub fn seed_user(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
        is_active: bool,
    ) -> AdminUser {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let now = Utc::now();
        let user = AdminUser {
            id: inner.allocate_id(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            role: role.to_string(),
            is_active,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        };
        inner.users.push(user.clone());
        user
    }

    /// Flip a seeded user to inactive (for assertions on revoked access).
    pub fn deactivate_user(&self, id: DbId) {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        if let Some(user) = inner.users.iter_mut().find(|u| u.id == id) {
            user.is_active = false;
        }
    }

    /// Snapshot of all ledger rows (for assertions).
    pub fn refresh_tokens(&self) -> Vec<RefreshToken> {
        self.inner.lock().expect("store mutex poisoned").tokens.clone()
    }

    /// Snapshot of all login-attempt rows (for assertions).
    pub fn login_logs(&self) -> Vec<LoginLog> {
        self.inner.lock().expect("store mutex poisoned").logs.clone()
    }

    /// Total store operations performed since construction.
    pub fn operation_count(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    fn count_op(&self) {
        self.operations.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl AuthStore for MemoryAuthStore {
    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUser>, StoreError> {
        self.count_op();
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_user_by_id(&self, id: DbId) -> Result<Option<AdminUser>, StoreError> {
        self.count_op();
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn touch_last_login(&self, id: DbId) -> Result<(), StoreError> {
        self.count_op();
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        if let Some(user) = inner.users.iter_mut().find(|u| u.id == id) {
            user.last_login_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn insert_refresh_token(
        &self,
        input: &CreateRefreshToken,
    ) -> Result<RefreshToken, StoreError> {
        self.count_op();
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let token = RefreshToken {
            id: inner.allocate_id(),
            admin_user_id: input.admin_user_id,
            token_hash: input.token_hash.clone(),
            expires_at: input.expires_at,
            revoked_at: None,
            ip_address: input.ip_address.clone(),
            created_at: Utc::now(),
        };
        inner.tokens.push(token.clone());
        Ok(token)
    }

    async fn find_active_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, StoreError> {
        self.count_op();
        let now = Utc::now();
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner
            .tokens
            .iter()
            .find(|t| t.token_hash == token_hash && t.revoked_at.is_none() && t.expires_at > now)
            .cloned())
    }

    async fn revoke_refresh_token(&self, id: DbId) -> Result<bool, StoreError> {
        self.count_op();
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        match inner
            .tokens
            .iter_mut()
            .find(|t| t.id == id && t.revoked_at.is_none())
        {
            Some(token) => {
                token.revoked_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn revoke_all_for_user(&self, user_id: DbId) -> Result<u64, StoreError> {
        self.count_op();
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let mut revoked = 0;
        let now = Utc::now();
        for token in inner
            .tokens
            .iter_mut()
            .filter(|t| t.admin_user_id == user_id && t.revoked_at.is_none())
        {
            token.revoked_at = Some(now);
            revoked += 1;
        }
        Ok(revoked)
    }

    async fn log_attempt(&self, input: &CreateLoginLog) -> Result<(), StoreError> {
        self.count_op();
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let log = LoginLog {
            id: inner.allocate_id(),
            admin_user_id: input.admin_user_id,
            username: input.username.clone(),
            ip_address: input.ip_address.clone(),
            user_agent: input.user_agent.clone(),
            success: input.success,
            failure_reason: input.failure_reason.clone(),
            created_at: Utc::now(),
        };
        inner.logs.push(log);
        Ok(())
    }
}
