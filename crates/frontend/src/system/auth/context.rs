use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api_utils::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    // The token is the only credential; restoring the session is reading it back
    let (auth_state, set_auth_state) = signal(AuthState {
        token: storage::get_token(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store a freshly issued token and publish it
pub fn sign_in(set_auth_state: WriteSignal<AuthState>, token: String) {
    storage::save_token(&token);
    set_auth_state.set(AuthState { token: Some(token) });
    log::info!("Signed in");
}

/// Drop the local session without calling the API (e.g. after a 401)
pub fn forget_session(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}

/// Helper: Perform logout. The local token is cleared even when the API
/// call fails.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Err(e) = api::logout().await {
        log::error!("Logout request failed: {}", e);
    }
    forget_session(set_auth_state);
}

/// Drop the session when an API call was refused for lack of a valid token
pub fn handle_api_error(set_auth_state: WriteSignal<AuthState>, error: &ApiError) {
    if error.requires_login() {
        log::warn!("Session is no longer valid: {}", error);
        forget_session(set_auth_state);
    }
}
