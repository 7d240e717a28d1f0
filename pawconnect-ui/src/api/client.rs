//! HTTP API Client
//!
//! The UI runs entirely from the bundled dataset. When it is served by
//! `pawconnect-server` it can swap in the dataset the server loaded.

use gloo_net::http::Request;
use pawconnect::dataset::Dataset;

/// Default API base URL (same origin as the UI)
pub const DEFAULT_API_BASE: &str = "/api/v1";

/// Local storage key overriding [`DEFAULT_API_BASE`]
pub const API_URL_STORAGE_KEY: &str = "pawconnect-api-url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_STORAGE_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

/// Remove trailing slashes; blank means the default
fn normalize_base(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Fetch the dataset served at `GET /dataset`
pub async fn fetch_dataset() -> Result<Dataset, String> {
    let url = format!("{}/dataset", get_api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch dataset: {}", response.status()));
    }

    response
        .json::<Dataset>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://localhost:8080/api/v1/"), "http://localhost:8080/api/v1");
        assert_eq!(normalize_base("/api/v1"), "/api/v1");
        assert_eq!(normalize_base("  "), DEFAULT_API_BASE);
    }
}
