//! Product form
//!
//! - view_model.rs: `ProductForm` draft, category options and the save command
//! - view.rs: Leptos component; the sale price input is read-only

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
