//! Repository for the append-only `admin_login_logs` table.

use sqlx::PgPool;

use evermore_core::types::DbId;

use crate::models::login_log::{CreateLoginLog, LoginLog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, admin_user_id, username, ip_address, user_agent, \
                        success, failure_reason, created_at";

/// Provides append and query operations for login-attempt logs.
///
/// Rows are never mutated or deleted; the table is a pure audit trail.
pub struct LoginLogRepo;

impl LoginLogRepo {
    /// Append a login-attempt row, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLoginLog) -> Result<LoginLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_login_logs
                 (admin_user_id, username, ip_address, user_agent, success, failure_reason)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LoginLog>(&query)
            .bind(input.admin_user_id)
            .bind(&input.username)
            .bind(&input.ip_address)
            .bind(&input.user_agent)
            .bind(input.success)
            .bind(&input.failure_reason)
            .fetch_one(pool)
            .await
    }

    /// List the most recent attempts for a username, newest first.
    pub async fn list_for_username(
        pool: &PgPool,
        username: &str,
        limit: i64,
    ) -> Result<Vec<LoginLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admin_login_logs
             WHERE username = $1
             ORDER BY created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, LoginLog>(&query)
            .bind(username)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List the most recent attempts for a user id, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<LoginLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admin_login_logs
             WHERE admin_user_id = $1
             ORDER BY created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, LoginLog>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
