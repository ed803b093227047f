//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use contracts::domain::common::PayloadError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of a single API call. Every variant is terminal for that call;
/// views render the `Display` text inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("API error: {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("{0}")]
    Payload(#[from] PayloadError),
    #[error("Not authenticated")]
    Unauthenticated,
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location and the
/// backend port.
///
/// # Returns
/// - API base URL like "http://localhost:8080" or "https://example.com:8080"
/// - `None` if window is not available
pub fn api_base(port: u16) -> Option<String> {
    let window = web_sys::window()?;
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    Some(format!("{}//{}:{}", protocol, hostname, port))
}

/// Build a full API URL from a base and a path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("http://localhost:8080/", "/stock"), "http://localhost:8080/stock");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn with_auth(builder: RequestBuilder, access_token: Option<&str>) -> RequestBuilder {
    match access_token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else if response.status() == 401 {
        Err(ApiError::Unauthenticated)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

/// GET a JSON body; any non-2xx status is a failure
pub async fn get_json<T>(url: &str, access_token: Option<&str>) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let response = with_auth(Request::get(url), access_token)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(&response)?;

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// POST without a body; the response body is ignored
pub async fn post_empty(url: &str, access_token: Option<&str>) -> Result<(), ApiError> {
    let response = with_auth(Request::post(url), access_token)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(&response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_without_double_slash() {
        assert_eq!(api_url("http://localhost:8080", "/stock"), "http://localhost:8080/stock");
        assert_eq!(api_url("http://localhost:8080/", "/stock"), "http://localhost:8080/stock");
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Status {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 500 Internal Server Error");

        let err: ApiError = PayloadError::MissingField("Articles").into();
        assert_eq!(err.to_string(), "Articles data is missing");
    }
}
