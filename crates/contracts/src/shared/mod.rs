pub mod api_error;
pub mod envelope;
pub mod filter;
pub mod pagination;
pub mod serde_utils;
pub mod validation;
