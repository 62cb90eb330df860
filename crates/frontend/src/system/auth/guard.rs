use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires authentication
/// Shows a login prompt if not authenticated
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! {
                <div class="auth-required">
                    "Please " <a href="/login">"log in"</a> " to see this page."
                </div>
            }
        >
            {children()}
        </Show>
    }
}
