use contracts::domain::a003_order::aggregate::{Order, OrderInfo};
use contracts::domain::a003_order::create::OrderCreate;
use gloo_net::http::Request;
use uuid::Uuid;

use crate::shared::api_utils::{api_url, auth_header, check_status, network_error, read_json, ApiError};

/// Fetch all orders of the current user
pub async fn fetch_orders() -> Result<Vec<OrderInfo>, ApiError> {
    let response = Request::get(&api_url("/order"))
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(network_error)?;

    read_json(response).await
}

/// Fetch order by ID
pub async fn fetch_order(id: Uuid) -> Result<Order, ApiError> {
    let response = Request::get(&api_url(&format!("/order/{}", id)))
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(network_error)?;

    read_json(response).await
}

/// Place an order from the current basket; the server empties the basket
pub async fn create_order(dto: &OrderCreate) -> Result<(), ApiError> {
    let response = Request::post(&api_url("/order"))
        .header("Authorization", &auth_header()?)
        .json(dto)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    check_status(&response)
}

/// Confirm that the order was delivered
pub async fn confirm_delivery(id: Uuid) -> Result<(), ApiError> {
    let response = Request::post(&api_url(&format!("/order/{}/status", id)))
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(network_error)?;

    check_status(&response)
}
