//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and requesting
//! the admin service, which answers with the `ServiceResponse` envelope.

use contracts::shared::ServiceResponse;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Port of the admin service on the console host
pub const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using `API_PORT` for the admin service.
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
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/admin/collections/addons-titles");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a service endpoint.
///
/// Transport, HTTP and parse failures are returned as an error envelope,
/// so callers handle a single response shape.
pub async fn get_service<T: DeserializeOwned>(path: &str) -> ServiceResponse<T> {
    match try_get_service(path).await {
        Ok(response) => response,
        Err(message) => ServiceResponse::failure(message),
    }
}

async fn try_get_service<T: DeserializeOwned>(path: &str) -> Result<ServiceResponse<T>, String> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<ServiceResponse<T>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
