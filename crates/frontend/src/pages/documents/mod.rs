pub mod list;
pub mod new;

pub use list::DocumentList;
pub use new::NewDocument;
