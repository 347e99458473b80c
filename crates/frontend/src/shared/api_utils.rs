//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Join an origin and an API path, tolerating a trailing slash on the origin
pub fn join_url(origin: &str, path: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), path)
}

/// `{base}/{id}` with the id percent-encoded
pub fn item_path(base: &str, id: &str) -> String {
    format!("{}/{}", base, urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3000/", "/api/routes/products"),
            "http://localhost:3000/api/routes/products"
        );
        assert_eq!(join_url("", "/api/x"), "/api/x");
    }

    #[test]
    fn test_item_path_encodes_id() {
        assert_eq!(item_path("/api/admins/products", "p1"), "/api/admins/products/p1");
        assert_eq!(item_path("/api/x", "a b/c"), "/api/x/a%20b%2Fc");
    }
}
