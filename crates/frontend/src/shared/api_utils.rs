//! API utilities for widget-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Build a full API URL from the configured base and a path
///
/// # Arguments
/// * `api_base` - `WidgetConfig::api_base`, relative ("/api/v1") or absolute
/// * `path` - endpoint path, with or without the leading slash
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/api/v1", "/calculator-data");
/// assert_eq!(url, "/api/v1/calculator-data");
/// ```
pub fn api_url(api_base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        api_base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
