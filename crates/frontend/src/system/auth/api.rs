use contracts::system::auth::{LoginCredentials, TokenResponse, UserRegister};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header, check_status, network_error, read_json, ApiError};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<TokenResponse, ApiError> {
    let request = LoginCredentials { email, password };

    let response = Request::post(&api_url("/account/login"))
        .json(&request)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    read_json(response).await
}

/// Create an account; the API logs the new user in right away
pub async fn register(request: UserRegister) -> Result<TokenResponse, ApiError> {
    let response = Request::post(&api_url("/account/register"))
        .json(&request)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    read_json(response).await
}

/// Logout (invalidate the token server-side)
pub async fn logout() -> Result<(), ApiError> {
    let response = Request::post(&api_url("/account/logout"))
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(network_error)?;

    check_status(&response)
}
