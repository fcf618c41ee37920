//! Tab management
//!
//! - `pages` - page table (keys, titles, permission gates, sidebar groups)
//! - `registry` - tab key to view
//! - `page` - `TabPage` wrapper

pub mod page;
pub mod pages;
pub mod registry;

pub use page::TabPage;
pub use pages::tab_label_for_key;
