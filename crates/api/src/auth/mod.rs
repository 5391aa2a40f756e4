//! Admin authentication: JWT access tokens, password hashing, cookie
//! descriptions, and the session-rotation state machine.

pub mod cookies;
pub mod jwt;
pub mod password;
pub mod session;
