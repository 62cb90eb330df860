use contracts::domain::a003_order::aggregate::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

use super::status_badge::StatusBadge;
use crate::domain::a003_order::api;
use crate::shared::date_utils::{format_datetime, local_now};
use crate::shared::notification::use_notifications;

#[component]
#[allow(non_snake_case)]
pub fn OrderDetails() -> impl IntoView {
    let params = use_params_map();
    let notifications = use_notifications();
    let order = RwSignal::new(None::<Order>);
    let (error, set_error) = signal::<Option<String>>(None);
    let (confirming, set_confirming) = signal(false);

    Effect::new(move |_| {
        let raw_id = params.read().get("id").unwrap_or_default();
        let Ok(id) = Uuid::parse_str(&raw_id) else {
            log::warn!("Invalid order id in URL: {}", raw_id);
            set_error.set(Some("Order not found".to_string()));
            return;
        };

        spawn_local(async move {
            match api::fetch_order(id).await {
                Ok(loaded) => {
                    set_error.set(None);
                    order.set(Some(loaded));
                }
                Err(e) => {
                    log::error!("Failed to fetch order {}: {}", id, e);
                    set_error.set(Some(format!("Failed to load order: {}", e)));
                }
            }
        });
    });

    let confirm = move |_| {
        let Some(id) = order.with_untracked(|o| o.as_ref().map(|o| o.id)) else {
            return;
        };
        if confirming.get_untracked() {
            return;
        }
        set_confirming.set(true);
        spawn_local(async move {
            match api::confirm_delivery(id).await {
                Ok(()) => {
                    order.update(|o| {
                        if let Some(o) = o {
                            if let Err(e) = o.confirm() {
                                log::warn!("{}", e);
                            }
                        }
                    });
                    log::info!("Order {} confirmed", id);
                    notifications.success("Delivery confirmed");
                }
                Err(e) => {
                    log::error!("Failed to confirm order {}: {}", id, e);
                    notifications.error("Failed to confirm the order");
                }
            }
            set_confirming.set(false);
        });
    };

    view! {
        <div class="order-details">
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            {move || order.get().map(|o| {
                let delivery = o.delivery_status(local_now());
                view! {
                    <h1>{format!("Order from {}", format_datetime(&o.order_time))}</h1>
                    <div>{format!("Delivery time: {}", format_datetime(&o.delivery_time))}</div>
                    <div>"Status: " <StatusBadge status=o.status /></div>
                    <div>{format!("Delivery: {}", delivery.display_name())}</div>
                    <div>{format!("Address: {}", o.address)}</div>
                    <div class="order-details__lines">
                        {o.dishes.iter().map(|item| view! {
                            <div class="cart-line">
                                <img class="cart-line__image" src=item.image.clone() alt=item.name.clone() />
                                <div class="cart-line__name">{item.display_text()}</div>
                                <div class="cart-line__total">{format!("Total Price: {} ₽", item.total_price)}</div>
                            </div>
                        }).collect_view()}
                    </div>
                    <div class="order-details__total">
                        {format!("{} items, total {} ₽", o.item_count(), o.price)}
                    </div>
                    {o.can_be_confirmed().then(|| view! {
                        <button class="btn-primary" disabled=move || confirming.get() on:click=confirm>
                            "Confirm delivery"
                        </button>
                    })}
                }
            })}
        </div>
    }
}
