//! Named application routes and placeholder substitution.

pub mod params;
pub mod paths;

pub use params::{CompanyRoute, OptionalCompanyRoute, RouteParams};
pub use paths::{
    format_path, format_route, placeholder_names, try_format_path, unresolved_placeholders,
    Paths, PLACEHOLDER_MARKER,
};
