use contracts::domain::a002_basket::aggregate::BasketItem;
use gloo_net::http::Request;
use uuid::Uuid;

use crate::shared::api_utils::{api_url, auth_header, check_status, network_error, read_json, ApiError};

/// Fetch the current user's basket
pub async fn fetch_basket() -> Result<Vec<BasketItem>, ApiError> {
    let response = Request::get(&api_url("/basket"))
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(network_error)?;

    read_json(response).await
}

/// Add one portion of the dish
pub async fn add_dish(dish_id: Uuid) -> Result<(), ApiError> {
    let response = Request::post(&api_url(&format!("/basket/dish/{}", dish_id)))
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(network_error)?;

    check_status(&response)
}

/// Take one portion out of the basket
pub async fn decrease_dish(dish_id: Uuid) -> Result<(), ApiError> {
    delete_dish(dish_id, true).await
}

/// Remove the whole line regardless of its amount
pub async fn remove_dish(dish_id: Uuid) -> Result<(), ApiError> {
    delete_dish(dish_id, false).await
}

async fn delete_dish(dish_id: Uuid, increase: bool) -> Result<(), ApiError> {
    let url = api_url(&format!("/basket/dish/{}?increase={}", dish_id, increase));
    let response = Request::delete(&url)
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(network_error)?;

    check_status(&response)
}
