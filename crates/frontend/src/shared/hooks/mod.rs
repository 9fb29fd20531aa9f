pub mod table_controls;

pub use table_controls::{
    use_table_controls, PaginationChange, TableControls, TableControlsArgs, TableControlsState,
};
