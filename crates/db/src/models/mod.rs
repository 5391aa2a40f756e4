pub mod admin_user;
pub mod guestbook;
pub mod login_log;
pub mod refresh_token;
pub mod rsvp;
pub mod site_content;
