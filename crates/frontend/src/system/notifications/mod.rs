pub mod api;
pub mod badge;
pub mod ui;
