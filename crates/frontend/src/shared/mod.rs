pub mod api_utils;
pub mod components;
pub mod hooks;
pub mod icons;
pub mod page_frame;
