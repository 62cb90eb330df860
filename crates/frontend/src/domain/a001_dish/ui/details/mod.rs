use contracts::domain::a001_dish::aggregate::Dish;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

use super::rating::StarRating;
use crate::domain::a001_dish::api;
use crate::shared::icons::icon;

#[component]
#[allow(non_snake_case)]
pub fn DishDetails() -> impl IntoView {
    let params = use_params_map();
    let (dish, set_dish) = signal::<Option<Dish>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    Effect::new(move |_| {
        let raw_id = params.read().get("id").unwrap_or_default();
        let id = match Uuid::parse_str(&raw_id) {
            Ok(id) => id,
            Err(_) => {
                log::warn!("Invalid dish id in URL: {}", raw_id);
                set_error.set(Some("Dish not found".to_string()));
                return;
            }
        };

        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_dish(id).await {
                Ok(loaded) => set_dish.set(Some(loaded)),
                Err(e) => {
                    log::error!("Failed to fetch dish {}: {}", id, e);
                    set_error.set(Some(format!("Failed to load dish: {}", e)));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="dish-details">
            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            {move || dish.get().map(|dish| {
                let description = dish.description.clone().unwrap_or_default();
                view! {
                    <h1>{dish.name.clone()}</h1>
                    <img class="dish-details__image" src=dish.image.clone() alt=dish.name.clone() />
                    <div class="dish-details__category">"Category: " {dish.category.clone()}</div>
                    {dish.vegetarian.then(|| view! {
                        <div class="dish-details__veg">{icon("leaf")}" Vegetarian"</div>
                    })}
                    <StarRating dish_id=dish.id rating=dish.rating />
                    <p class="dish-details__description">{description}</p>
                    <div class="dish-details__price">{format!("Price: {} ₽", dish.price)}</div>
                }
            })}
        </div>
    }
}
