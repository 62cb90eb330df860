use contracts::domain::a001_dish::aggregate::{Dish, DishPagedList};
use contracts::domain::a001_dish::query::DishListQuery;
use contracts::domain::a001_dish::rating::RatingScore;
use gloo_net::http::Request;
use uuid::Uuid;

use crate::shared::api_utils::{api_url, auth_header, check_status, network_error, read_json, ApiError};

/// Fetch one page of the menu
pub async fn fetch_dishes(query: &DishListQuery) -> Result<DishPagedList, ApiError> {
    let response = Request::get(&api_url(&format!("/dish?{}", query.to_query_string())))
        .send()
        .await
        .map_err(network_error)?;

    read_json(response).await
}

/// Fetch dish by ID
pub async fn fetch_dish(id: Uuid) -> Result<Dish, ApiError> {
    let response = Request::get(&api_url(&format!("/dish/{}", id)))
        .send()
        .await
        .map_err(network_error)?;

    read_json(response).await
}

/// Whether the current user may rate the dish (ordered it before)
pub async fn check_rating(id: Uuid) -> Result<bool, ApiError> {
    let response = Request::get(&api_url(&format!("/dish/{}/rating/check", id)))
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(network_error)?;

    read_json(response).await
}

pub async fn set_rating(id: Uuid, score: RatingScore) -> Result<(), ApiError> {
    let url = api_url(&format!("/dish/{}/rating?ratingScore={}", id, score.value()));
    let response = Request::post(&url)
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(network_error)?;

    check_status(&response)
}
