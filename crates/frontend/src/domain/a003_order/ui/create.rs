use contracts::domain::a003_order::create::OrderCreate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::a003_order::api;
use crate::shared::date_utils::{default_delivery_input, local_now};
use crate::shared::notification::use_notifications;

/// Delivery time and address form under the cart. Places an order from the
/// whole basket.
#[component]
pub fn OrderForm() -> impl IntoView {
    let notifications = use_notifications();
    let navigate = use_navigate();
    let (delivery_time, set_delivery_time) = signal(default_delivery_input(local_now()));
    let (address, set_address) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let body = match OrderCreate::from_form(
            &delivery_time.get_untracked(),
            &address.get_untracked(),
            local_now(),
        ) {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Order form rejected: {}", e);
                notifications.validation(e.to_string());
                return;
            }
        };

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_order(&body).await {
                Ok(()) => {
                    log::info!("Order created for delivery at {}", body.delivery_time);
                    notifications.success("Order created successfully");
                    navigate("/orders", Default::default());
                }
                Err(e) => {
                    log::error!("Failed to create order: {}", e);
                    notifications.validation("Failed to create order. Please try again.");
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="order-form" on:submit=on_submit>
            <h2>"Delivery"</h2>
            <div class="form-group">
                <label for="deliveryTime">"Delivery time"</label>
                <input
                    type="datetime-local"
                    id="deliveryTime"
                    prop:value=move || delivery_time.get()
                    on:input=move |ev| set_delivery_time.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="address">"Address"</label>
                <input
                    type="text"
                    id="address"
                    placeholder="12 Lenina street"
                    prop:value=move || address.get()
                    on:input=move |ev| set_address.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                {move || if submitting.get() { "Placing order..." } else { "Create order" }}
            </button>
        </form>
    }
}
