pub mod controlled_table;
pub mod sortable_header_cell;

pub use controlled_table::ControlledTable;
pub use sortable_header_cell::SortableHeaderCell;
