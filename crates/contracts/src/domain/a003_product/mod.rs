pub mod aggregate;
pub mod pricing;

pub use aggregate::{Product, ProductForm, ProductPayload};
