pub mod companies;
pub mod controls;
pub mod documents;
pub mod not_found;
