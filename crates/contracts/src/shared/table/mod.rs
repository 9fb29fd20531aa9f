pub mod query;

pub use query::{PageQuery, SortByQuery, SortDirection, DEFAULT_PAGE, DEFAULT_PER_PAGE};
