//! Aliases shared by every table-backed type.

/// Primary keys are PostgreSQL BIGSERIAL throughout the schema.
pub type DbId = i64;

/// Timestamps are stored and compared in UTC only.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
