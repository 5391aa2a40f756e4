//! Guestbook entry model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use evermore_core::types::{DbId, Timestamp};

/// A guestbook entry from the `guestbook_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GuestbookEntry {
    pub id: DbId,
    pub author: String,
    pub message: String,
    /// Hidden entries are kept for the couple but excluded from the public feed.
    pub is_hidden: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a guestbook entry.
#[derive(Debug, Deserialize)]
pub struct CreateGuestbookEntry {
    pub author: String,
    pub message: String,
}
