use contracts::domain::a001_dish::aggregate::Dish;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::rating::StarRating;
use crate::domain::a002_basket::api as basket_api;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::system::auth::storage;

/// Menu card: image, name, category, stars, description, price and a cart
/// stepper. `quantity` is the amount already in the basket.
#[component]
pub fn DishCard(dish: Dish, quantity: u32) -> impl IntoView {
    let notifications = use_notifications();
    let navigate = use_navigate();
    let amount = RwSignal::new(quantity);
    let busy = RwSignal::new(false);
    let dish_id = dish.id;
    let vegetarian = dish.vegetarian;

    let change = move |increase: bool| {
        if busy.get_untracked() {
            return;
        }
        if !storage::has_token() {
            notifications.error("Please log in to add dishes to the cart");
            return;
        }
        busy.set(true);
        spawn_local(async move {
            let result = if increase {
                basket_api::add_dish(dish_id).await
            } else {
                basket_api::decrease_dish(dish_id).await
            };
            match result {
                Ok(()) => {
                    amount.update(|n| {
                        *n = if increase { *n + 1 } else { n.saturating_sub(1) }
                    });
                    log::debug!("Basket amount of {} is now {}", dish_id, amount.get_untracked());
                }
                Err(e) => {
                    log::error!("Failed to update basket for {}: {}", dish_id, e);
                    notifications.error(e.to_string());
                }
            }
            busy.set(false);
        });
    };

    let open_details = move |_| navigate(&format!("/dish/{}", dish_id), Default::default());

    let description = dish.description.clone().unwrap_or_default();

    view! {
        <div class="dish-card">
            <div class="dish-card__body" on:click=open_details>
                <img class="dish-card__image" src=dish.image.clone() alt=dish.name.clone() />
                <h3 class="dish-card__name">{dish.name.clone()}</h3>
                <div class="dish-card__category">
                    "Category: " {dish.category.clone()}
                    <Show when=move || vegetarian>
                        <span class="dish-card__veg" title="Vegetarian">{icon("leaf")}</span>
                    </Show>
                </div>
                <p class="dish-card__description">{description}</p>
            </div>
            <StarRating dish_id=dish_id rating=dish.rating />
            <div class="dish-card__footer">
                <span class="dish-card__price">{format!("{} ₽", dish.price)}</span>
                <Show
                    when=move || { amount.get() > 0 }
                    fallback=move || view! {
                        <button class="btn-primary" disabled=move || busy.get() on:click=move |_| change(true)>
                            "Add to cart"
                        </button>
                    }
                >
                    <div class="stepper">
                        <button class="stepper__btn" disabled=move || busy.get() on:click=move |_| change(false)>
                            {icon("minus")}
                        </button>
                        <span class="stepper__value">{move || amount.get()}</span>
                        <button class="stepper__btn" disabled=move || busy.get() on:click=move |_| change(true)>
                            {icon("plus")}
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
