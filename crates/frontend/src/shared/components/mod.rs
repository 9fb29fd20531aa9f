pub mod page_header;
pub mod pagination_controls;
pub mod table;

pub use page_header::{Breadcrumb, MenuAction, MenuTarget, NavItem, PageHeader};
pub use pagination_controls::PaginationControls;
