use contracts::system::account::{UserEdit, UserProfile};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header, check_status, network_error, read_json, ApiError};

/// Fetch the signed-in user's profile
pub async fn fetch_profile() -> Result<UserProfile, ApiError> {
    let response = Request::get(&api_url("/account/profile"))
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(network_error)?;

    read_json(response).await
}

/// Update profile
pub async fn update_profile(dto: &UserEdit) -> Result<(), ApiError> {
    let response = Request::put(&api_url("/account/profile"))
        .header("Authorization", &auth_header()?)
        .json(dto)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    check_status(&response)
}
