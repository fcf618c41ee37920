mod view;
mod view_model;

pub use view::UserDetails;
pub use view_model::UserDetailsViewModel;
