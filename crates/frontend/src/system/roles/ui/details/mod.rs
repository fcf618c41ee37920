mod view;
mod view_model;

pub use view::RoleDetails;
pub use view_model::RoleDetailsViewModel;
