//! Repository for the `rsvp_responses` table.

use sqlx::PgPool;

use crate::models::rsvp::{CreateRsvp, RsvpResponse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, guest_name, attending, companions, meal, note, created_at";

/// Provides insert and query operations for RSVP responses.
pub struct RsvpRepo;

impl RsvpRepo {
    /// Insert a new RSVP, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRsvp) -> Result<RsvpResponse, sqlx::Error> {
        let query = format!(
            "INSERT INTO rsvp_responses (guest_name, attending, companions, meal, note)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RsvpResponse>(&query)
            .bind(&input.guest_name)
            .bind(input.attending)
            .bind(input.companions)
            .bind(&input.meal)
            .bind(&input.note)
            .fetch_one(pool)
            .await
    }

    /// List all responses, newest first (admin view).
    pub async fn list(pool: &PgPool) -> Result<Vec<RsvpResponse>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rsvp_responses ORDER BY created_at DESC");
        sqlx::query_as::<_, RsvpResponse>(&query).fetch_all(pool).await
    }

    /// Count attending guests including companions.
    pub async fn count_attending(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(1 + companions), 0)::BIGINT
             FROM rsvp_responses WHERE attending = true",
        )
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
