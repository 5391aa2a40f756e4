//! Repository for the `admin_refresh_tokens` rotation ledger.

use sqlx::PgPool;

use evermore_core::types::DbId;

use crate::models::refresh_token::{CreateRefreshToken, RefreshToken};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, admin_user_id, token_hash, expires_at, revoked_at, \
                        ip_address, created_at";

/// Provides ledger operations for refresh tokens.
pub struct RefreshTokenRepo;

impl RefreshTokenRepo {
    /// Insert a new ledger row, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRefreshToken,
    ) -> Result<RefreshToken, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_refresh_tokens (admin_user_id, token_hash, expires_at, ip_address)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RefreshToken>(&query)
            .bind(input.admin_user_id)
            .bind(&input.token_hash)
            .bind(input.expires_at)
            .bind(&input.ip_address)
            .fetch_one(pool)
            .await
    }

    /// Find an active ledger row by token hash.
    ///
    /// Only returns rows that are not revoked and not expired.
    pub async fn find_active_by_hash(
        pool: &PgPool,
        hash: &str,
    ) -> Result<Option<RefreshToken>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admin_refresh_tokens
             WHERE token_hash = $1
               AND revoked_at IS NULL
               AND expires_at > NOW()"
        );
        sqlx::query_as::<_, RefreshToken>(&query)
            .bind(hash)
            .fetch_optional(pool)
            .await
    }

    /// Revoke a single ledger row. Returns `true` if the row was updated.
    ///
    /// The `AND revoked_at IS NULL` guard makes this the single-use check for
    /// concurrent rotations: the second of two racing calls affects zero rows.
    pub async fn revoke(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE admin_refresh_tokens SET revoked_at = NOW()
             WHERE id = $1 AND revoked_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Revoke all active tokens for a user. Returns the count of revoked rows.
    pub async fn revoke_all_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE admin_refresh_tokens SET revoked_at = NOW()
             WHERE admin_user_id = $1 AND revoked_at IS NULL",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete ledger rows more than 30 days past expiry.
    ///
    /// Recently expired and revoked rows are kept as an audit trail; only the
    /// long tail is swept. Returns the count of deleted rows.
    pub async fn cleanup_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM admin_refresh_tokens WHERE expires_at < NOW() - INTERVAL '30 days'",
        )
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
