pub mod auth;
pub mod notifications;
pub mod roles;
pub mod users;
