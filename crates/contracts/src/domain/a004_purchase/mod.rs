pub mod aggregate;

pub use aggregate::{Purchase, PurchaseImportResult};
