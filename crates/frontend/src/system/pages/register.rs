use contracts::system::auth::{RegisterForm, UserRegister};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::system::auth::{api, context::{sign_in, use_auth}};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm {
        gender: "Male".to_string(),
        ..RegisterForm::default()
    });
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = match UserRegister::from_form(&form.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                set_error_message.set(Some(e.to_string()));
                return;
            }
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(request).await {
                Ok(response) => {
                    sign_in(set_auth_state, response.token);
                    set_is_loading.set(false);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    log::error!("Registration failed: {}", e);
                    set_error_message.set(Some(format!("Registration failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    let text_field = move |id: &'static str,
                           label: &'static str,
                           kind: &'static str,
                           get: fn(&RegisterForm) -> String,
                           set: fn(&mut RegisterForm, String)| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=kind
                    id=id
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                    disabled=move || is_loading.get()
                />
            </div>
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Food Delivery"</h1>
                <h2>"Registration"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    {text_field("fullName", "Full name", "text",
                        |f| f.full_name.clone(), |f, v| f.full_name = v)}
                    <div class="form-group">
                        <span>"Gender"</span>
                        <label>
                            <input type="radio" name="gender" value="Male"
                                prop:checked=move || form.with(|f| f.gender == "Male")
                                on:change=move |_| form.update(|f| f.gender = "Male".to_string())
                            />
                            "Male"
                        </label>
                        <label>
                            <input type="radio" name="gender" value="Female"
                                prop:checked=move || form.with(|f| f.gender == "Female")
                                on:change=move |_| form.update(|f| f.gender = "Female".to_string())
                            />
                            "Female"
                        </label>
                    </div>
                    {text_field("phoneNumber", "Phone", "tel",
                        |f| f.phone_number.clone(), |f, v| f.phone_number = v)}
                    {text_field("birthDate", "Birth date", "date",
                        |f| f.birth_date.clone(), |f, v| f.birth_date = v)}
                    {text_field("address", "Address", "text",
                        |f| f.address.clone(), |f, v| f.address = v)}
                    {text_field("email", "Email", "email",
                        |f| f.email.clone(), |f, v| f.email = v)}
                    {text_field("new-password", "Password", "password",
                        |f| f.password.clone(), |f, v| f.password = v)}

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Already registered? " <a href="/login">"Sign in"</a></p>
                </div>
            </div>
        </div>
    }
}
