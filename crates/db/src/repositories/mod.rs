//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_user_repo;
pub mod guestbook_repo;
pub mod login_log_repo;
pub mod refresh_token_repo;
pub mod rsvp_repo;
pub mod site_content_repo;

pub use admin_user_repo::AdminUserRepo;
pub use guestbook_repo::GuestbookRepo;
pub use login_log_repo::LoginLogRepo;
pub use refresh_token_repo::RefreshTokenRepo;
pub use rsvp_repo::RsvpRepo;
pub use site_content_repo::SiteContentRepo;
