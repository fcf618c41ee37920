pub mod aggregate;

pub use aggregate::{Cashier, Sale, SaleItem};
