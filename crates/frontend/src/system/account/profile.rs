use contracts::system::account::{UserEdit, UserProfile};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::date_utils::format_date;
use crate::shared::notification::use_notifications;
use crate::system::auth::context::{handle_api_error, use_auth};

/// Profile page: name, birth date, address and phone are editable; email
/// and gender are shown read-only.
#[component]
#[allow(non_snake_case)]
pub fn ProfilePage() -> impl IntoView {
    let notifications = use_notifications();
    let (_, set_auth_state) = use_auth();
    let profile = RwSignal::new(None::<UserProfile>);
    let full_name = RwSignal::new(String::new());
    let birth_date = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match api::fetch_profile().await {
            Ok(loaded) => {
                full_name.set(loaded.full_name.clone());
                birth_date.set(loaded.birth_date_input());
                address.set(loaded.address.clone().unwrap_or_default());
                phone.set(loaded.phone_number.clone().unwrap_or_default());
                profile.set(Some(loaded));
            }
            Err(e) => {
                log::error!("Failed to fetch profile: {}", e);
                handle_api_error(set_auth_state, &e);
                set_error.set(Some(e.to_string()));
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let gender = profile.with_untracked(|p| p.as_ref().map(|p| p.gender));
        let dto = UserEdit::from_form(
            &full_name.get_untracked(),
            &birth_date.get_untracked(),
            &address.get_untracked(),
            &phone.get_untracked(),
            gender,
        );
        if dto.full_name.is_empty() {
            notifications.validation("Full name is required");
            return;
        }

        set_saving.set(true);
        spawn_local(async move {
            match api::update_profile(&dto).await {
                Ok(()) => {
                    log::info!("Profile updated");
                    notifications.success("Profile saved");
                }
                Err(e) => {
                    log::error!("Failed to update profile: {}", e);
                    notifications.error(format!("Failed to save profile: {}", e));
                }
            }
            set_saving.set(false);
        });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=kind
                    id=id
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    disabled=move || saving.get()
                />
            </div>
        }
    };

    view! {
        <div class="profile">
            <h1>"Profile"</h1>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || profile.with(|p| p.is_some())>
                <form on:submit=on_submit>
                    {field("fullName", "Full name", "text", full_name)}
                    <div class="form-group">
                        <span>"Email"</span>
                        <span class="profile__readonly">
                            {move || profile.with(|p| p.as_ref().map(|p| p.email.clone()).unwrap_or_default())}
                        </span>
                    </div>
                    {field("birthDate", "Birth date", "date", birth_date)}
                    <div class="form-group">
                        <span>"Gender"</span>
                        <span class="profile__readonly">
                            {move || profile.with(|p| p.as_ref().map(|p| p.gender.code()).unwrap_or_default())}
                        </span>
                    </div>
                    {field("address", "Address", "text", address)}
                    {field("phoneNumber", "Phone", "tel", phone)}
                    <div class="profile__hint">
                        {move || {
                            let date = birth_date.get();
                            if date.is_empty() { String::new() } else { format!("Born {}", format_date(&date)) }
                        }}
                    </div>
                    <button type="submit" class="btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
