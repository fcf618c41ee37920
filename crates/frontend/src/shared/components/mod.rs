pub mod delete_confirm;
pub mod field_error;
pub mod page_header;
pub mod pagination_controls;
pub mod table;

pub use delete_confirm::{DeleteConfirm, DeleteTarget};
pub use field_error::{ErrorBanner, FieldError};
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use table::TableCellMoney;
