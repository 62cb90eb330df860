use web_sys::window;

use crate::shared::config::TOKEN_STORAGE_KEY;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save bearer token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
            log::error!("Failed to persist auth token");
        }
    }
}

/// Get bearer token from localStorage; an empty value counts as absent
pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(TOKEN_STORAGE_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

pub fn has_token() -> bool {
    get_token().is_some()
}

/// Remove the stored token
pub fn clear_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}
