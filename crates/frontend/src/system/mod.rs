pub mod auth;
pub mod notifications;
pub mod pages;
pub mod roles;
pub mod users;
