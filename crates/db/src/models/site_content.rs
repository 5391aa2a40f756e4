//! Editable invitation-site content sections.

use serde::Serialize;
use sqlx::FromRow;

use evermore_core::types::{DbId, Timestamp};

/// Known section names matching the seed data.
pub mod sections {
    pub const PROFILE: &str = "profile";
    pub const VENUE: &str = "venue";
    pub const THEME: &str = "theme";
    pub const BGM: &str = "bgm";
    pub const GALLERY: &str = "gallery";
}

/// One editable content section from the `site_content` table.
///
/// The payload is schemaless JSON: each section (profile, venue, theme, bgm,
/// gallery metadata) carries whatever shape the invitation front-end renders.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteContent {
    pub id: DbId,
    pub section: String,
    pub data: serde_json::Value,
    pub updated_at: Timestamp,
}
