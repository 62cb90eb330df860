//! API utilities for talking to the food-delivery REST API
//!
//! Provides URL construction, the bearer header and response checking shared
//! by the per-aggregate `api.rs` modules.

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::config;
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No token stored; the call was not attempted
    #[error("not authenticated")]
    NotAuthenticated,

    /// Server rejected the token (HTTP 401); the stored token is dropped
    #[error("session expired, please log in again")]
    Unauthorized,

    #[error("request failed with status {0}")]
    Status(u16),

    #[error("failed to send request: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Errors after which the user has to log in (again)
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::NotAuthenticated | ApiError::Unauthorized)
    }
}

/// Get the base URL for API requests
pub fn api_base() -> &'static str {
    config::api_base()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&format!("/dish/{}", id));
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `Bearer <token>` for authenticated calls
pub fn auth_header() -> Result<String, ApiError> {
    storage::get_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or(ApiError::NotAuthenticated)
}

pub fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Map a non-2xx response to an error. A 401 also clears the stored token.
pub fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    if status == 401 {
        log::warn!("API answered 401 for {}, dropping stored token", response.url());
        storage::clear_token();
        return Err(ApiError::Unauthorized);
    }
    Err(ApiError::Status(status))
}

/// Check the status and decode a JSON body
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check_status(&response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(api_url("/dish"), format!("{}/dish", api_base()));
    }

    #[test]
    fn test_login_required_errors() {
        assert!(ApiError::NotAuthenticated.requires_login());
        assert!(ApiError::Unauthorized.requires_login());
        assert!(!ApiError::Status(500).requires_login());
        assert_eq!(
            ApiError::Status(404).to_string(),
            "request failed with status 404"
        );
    }
}
