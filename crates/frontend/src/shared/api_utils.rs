//! Addresses of the external data source.
//!
//! The frontend never talks to it directly; listings only describe the
//! request (path + query string) a loader would send.

/// Port the data API listens on, next to the host serving the frontend.
pub const API_PORT: u16 = 3000;

/// Base URL of the data API derived from the current window location,
/// e.g. `http://localhost:3000`. Empty when there is no window.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Join base, path and an already encoded query string.
pub fn build_url(base: &str, path: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{}{}", base, path)
    } else {
        format!("{}{}?{}", base, path, query)
    }
}

pub fn api_url(path: &str, query: &str) -> String {
    build_url(&api_base(), path, query)
}
