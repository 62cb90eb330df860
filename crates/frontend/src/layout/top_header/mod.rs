//! TopHeader component - storefront navigation bar.
//!
//! Catalogue, orders and cart links for everyone; login/register for
//! anonymous visitors, profile and logout once signed in.

use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            do_logout(set_auth_state).await;
            log::info!("Logged out");
            navigate("/login", Default::default());
        });
    };

    let is_authenticated = move || auth_state.get().is_authenticated();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <a href="/" class="top-header__title">"Food Delivery"</a>
            </div>

            <nav class="top-header__nav">
                <a href="/" class="top-header__link">{icon("menu")}" Menu"</a>
                <a href="/orders" class="top-header__link">{icon("orders")}" Orders"</a>
                <a href="/cart" class="top-header__link">{icon("cart")}" Cart"</a>
            </nav>

            <div class="top-header__actions">
                <Show
                    when=is_authenticated
                    fallback=|| view! {
                        <a href="/login" class="top-header__link">"Sign in"</a>
                        <a href="/register" class="top-header__link">"Register"</a>
                    }
                >
                    <a href="/profile" class="top-header__user" title="Profile">
                        {icon("user")}
                        <span>"Profile"</span>
                    </a>
                </Show>

                <Show when=is_authenticated>
                    <button class="top-header__icon-btn" on:click=logout.clone() title="Log out">
                        {icon("logout")}
                    </button>
                </Show>
            </div>
        </div>
    }
}
