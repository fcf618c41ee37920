//! Payloads exchanged with the Apotek backend, plus the client-side rules
//! that work on them: derived pricing, permission checks and list filtering.

pub mod domain;
pub mod shared;
pub mod system;
