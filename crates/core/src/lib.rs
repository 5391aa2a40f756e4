//! Shared domain types and credential primitives for the Evermore backend.
//!
//! This crate has no internal dependencies so both the repository layer and
//! the API server can use it.

pub mod error;
pub mod hashing;
pub mod tokens;
pub mod types;
