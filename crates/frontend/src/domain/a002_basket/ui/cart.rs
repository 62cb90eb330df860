use contracts::domain::a002_basket::aggregate::{BasketItem, BasketState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::domain::a003_order::ui::create::OrderForm;
use crate::domain::a002_basket::api;
use crate::shared::api_utils::ApiError;
use crate::shared::config::CART_REFRESH_DEBOUNCE_MS;
use crate::shared::debounce::Debouncer;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::system::auth::context::{handle_api_error, use_auth};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineAction {
    Increase,
    Decrease,
    Remove,
}

#[component]
#[allow(non_snake_case)]
pub fn CartPage() -> impl IntoView {
    let notifications = use_notifications();
    let (_, set_auth_state) = use_auth();
    let basket = RwSignal::new(BasketState::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let refresh_debouncer = Debouncer::new(CART_REFRESH_DEBOUNCE_MS);

    let load_basket = move || {
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_basket().await {
                Ok(items) => {
                    let state = BasketState::from_items(items);
                    log::debug!("Basket loaded: {:?}", state.summary());
                    basket.set(state);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load basket: {}", e);
                    handle_api_error(set_auth_state, &e);
                    set_error.set(Some(e.to_string()));
                    notifications.error("Failed to load cart");
                }
            }
            set_loading.set(false);
        });
    };

    load_basket();

    let change_line = move |dish_id: Uuid, action: LineAction| {
        spawn_local(async move {
            let result: Result<(), ApiError> = match action {
                LineAction::Increase => api::add_dish(dish_id).await,
                LineAction::Decrease => api::decrease_dish(dish_id).await,
                LineAction::Remove => api::remove_dish(dish_id).await,
            };
            match result {
                Ok(()) => {
                    log::debug!("Basket line {} updated: {:?}", dish_id, action);
                    refresh_debouncer.schedule(move || async move { load_basket() });
                }
                Err(e) => {
                    log::error!("Failed to update basket line {}: {}", dish_id, e);
                    let message = match action {
                        LineAction::Increase => "Failed to add item to cart",
                        LineAction::Decrease => "Failed to update quantity",
                        LineAction::Remove => "Failed to remove item from cart",
                    };
                    notifications.error(message);
                }
            }
        });
    };

    let render_line = move |item: BasketItem| {
        let dish_id = item.id;
        let amount = item.amount;
        view! {
            <div class="cart-line">
                <img class="cart-line__image" src=item.image.clone() alt=item.name.clone() />
                <div class="cart-line__name">
                    <a href=format!("/dish/{}", dish_id)>{item.name.clone()}</a>
                    <div class="cart-line__price">{format!("Price: {} ₽", item.price)}</div>
                </div>
                <div class="stepper">
                    <button
                        class="stepper__btn"
                        on:click=move |_| change_line(dish_id, LineAction::Decrease)
                    >
                        {icon("minus")}
                    </button>
                    <span class="stepper__value">{amount}</span>
                    <button
                        class="stepper__btn"
                        on:click=move |_| change_line(dish_id, LineAction::Increase)
                    >
                        {icon("plus")}
                    </button>
                </div>
                <div class="cart-line__total">{format!("Total Price: {} ₽", item.total_price)}</div>
                <button
                    class="top-header__icon-btn"
                    title="Remove"
                    on:click=move |_| change_line(dish_id, LineAction::Remove)
                >
                    {icon("trash")}
                </button>
            </div>
        }
    };

    view! {
        <div class="cart">
            <h1>"Cart"</h1>
            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !basket.with(|b| b.is_empty())
                fallback=move || view! {
                    <Show when=move || !loading.get()>
                        <div class="cart__empty">"Your cart is empty"</div>
                    </Show>
                }
            >
                <div class="cart__lines">
                    {move || {
                        basket
                            .with(|b| b.items().to_vec())
                            .into_iter()
                            .map(render_line)
                            .collect_view()
                    }}
                </div>
                <div class="cart__summary">
                    {move || {
                        let summary = basket.with(|b| b.summary());
                        format!(
                            "{} items ({} dishes), total {} ₽",
                            summary.item_count, summary.unique_items, summary.total_price
                        )
                    }}
                </div>
                <OrderForm />
            </Show>
        </div>
    }
}
