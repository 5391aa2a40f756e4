//! RSVP response model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use evermore_core::types::{DbId, Timestamp};

/// An RSVP response from the `rsvp_responses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RsvpResponse {
    pub id: DbId,
    pub guest_name: String,
    pub attending: bool,
    /// Number of accompanying guests (not counting the respondent).
    pub companions: i32,
    pub meal: Option<String>,
    pub note: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for submitting an RSVP.
#[derive(Debug, Deserialize)]
pub struct CreateRsvp {
    pub guest_name: String,
    pub attending: bool,
    #[serde(default)]
    pub companions: i32,
    pub meal: Option<String>,
    pub note: Option<String>,
}
