use contracts::domain::a003_order::aggregate::OrderInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use super::status_badge::StatusBadge;
use crate::domain::a003_order::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::notification::use_notifications;
use crate::system::auth::context::{handle_api_error, use_auth};

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let notifications = use_notifications();
    let (_, set_auth_state) = use_auth();
    let orders = RwSignal::new(Vec::<OrderInfo>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        set_loading.set(true);
        match api::fetch_orders().await {
            Ok(loaded) => {
                log::debug!("Loaded {} orders", loaded.len());
                orders.set(loaded);
            }
            Err(e) => {
                log::error!("Failed to fetch orders: {}", e);
                handle_api_error(set_auth_state, &e);
                set_error.set(Some(e.to_string()));
            }
        }
        set_loading.set(false);
    });

    let confirm = move |id: Uuid| {
        spawn_local(async move {
            match api::confirm_delivery(id).await {
                Ok(()) => {
                    orders.update(|orders| {
                        if let Some(order) = orders.iter_mut().find(|o| o.id == id) {
                            if let Err(e) = order.confirm() {
                                log::warn!("Order {} confirmed remotely but not locally: {}", id, e);
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
        });
    };

    view! {
        <div class="orders">
            <h1>"Orders"</h1>
            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || !loading.get() && error.get().is_none() && orders.with(|o| o.is_empty())>
                <h5>"No orders yet"</h5>
            </Show>

            <For
                each=move || orders.get()
                key=|order| (order.id, order.status)
                let:order
            >
                {
                    let id = order.id;
                    let status = order.status;
                    view! {
                        <div class="order-row">
                            <a href=format!("/orders/{}", id) class="order-row__title">
                                {format!("Order from {}", format_datetime(&order.order_time))}
                            </a>
                            <div>"Status: " <StatusBadge status=status /></div>
                            <div>{format!("Delivery time: {}", format_datetime(&order.delivery_time))}</div>
                            <div class="order-row__price">{format!("Total price: {} ₽", order.price)}</div>
                            {status.can_be_confirmed().then(|| view! {
                                <button class="btn-primary" on:click=move |_| confirm(id)>
                                    "Confirm delivery"
                                </button>
                            })}
                        </div>
                    }
                }
            </For>
        </div>
    }
}
