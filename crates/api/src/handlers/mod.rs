pub mod auth;
pub mod content;
pub mod guestbook;
pub mod maintenance;
pub mod rsvp;
