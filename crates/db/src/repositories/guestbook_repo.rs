//! Repository for the `guestbook_entries` table.

use sqlx::PgPool;

use evermore_core::types::DbId;

use crate::models::guestbook::{CreateGuestbookEntry, GuestbookEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author, message, is_hidden, created_at";

/// Provides CRUD operations for guestbook entries.
pub struct GuestbookRepo;

impl GuestbookRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGuestbookEntry,
    ) -> Result<GuestbookEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO guestbook_entries (author, message)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GuestbookEntry>(&query)
            .bind(&input.author)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List visible entries, newest first (public feed).
    pub async fn list_visible(pool: &PgPool) -> Result<Vec<GuestbookEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM guestbook_entries
             WHERE is_hidden = false
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, GuestbookEntry>(&query).fetch_all(pool).await
    }

    /// List all entries including hidden ones, newest first (admin view).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<GuestbookEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guestbook_entries ORDER BY created_at DESC");
        sqlx::query_as::<_, GuestbookEntry>(&query).fetch_all(pool).await
    }

    /// Set an entry's hidden flag. Returns the updated row if it exists.
    pub async fn set_hidden(
        pool: &PgPool,
        id: DbId,
        hidden: bool,
    ) -> Result<Option<GuestbookEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE guestbook_entries SET is_hidden = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GuestbookEntry>(&query)
            .bind(id)
            .bind(hidden)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM guestbook_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
