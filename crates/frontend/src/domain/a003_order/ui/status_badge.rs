use contracts::domain::a003_order::status::OrderStatus;
use leptos::prelude::*;

#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<OrderStatus>) -> impl IntoView {
    view! {
        <span
            class="status-badge"
            style=move || format!("--status-color: {}", status.get().color())
        >
            {move || status.get().display_name()}
        </span>
    }
}
