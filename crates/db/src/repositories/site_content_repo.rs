//! Repository for the `site_content` table.

use sqlx::PgPool;

use crate::models::site_content::SiteContent;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, section, data, updated_at";

/// Provides read and upsert operations for invitation content sections.
pub struct SiteContentRepo;

impl SiteContentRepo {
    /// List all content sections ordered by section name.
    pub async fn list(pool: &PgPool) -> Result<Vec<SiteContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_content ORDER BY section");
        sqlx::query_as::<_, SiteContent>(&query).fetch_all(pool).await
    }

    /// Fetch a single section by name.
    pub async fn find_by_section(
        pool: &PgPool,
        section: &str,
    ) -> Result<Option<SiteContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_content WHERE section = $1");
        sqlx::query_as::<_, SiteContent>(&query)
            .bind(section)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace a section's payload, returning the stored row.
    pub async fn upsert(
        pool: &PgPool,
        section: &str,
        data: &serde_json::Value,
    ) -> Result<SiteContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_content (section, data)
             VALUES ($1, $2)
             ON CONFLICT (section)
             DO UPDATE SET data = EXCLUDED.data, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteContent>(&query)
            .bind(section)
            .bind(data)
            .fetch_one(pool)
            .await
    }
}
