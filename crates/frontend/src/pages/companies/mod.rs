pub mod details;
pub mod list;
pub mod new;

pub use details::CompanyDetails;
pub use list::CompanyList;
pub use new::NewCompany;
