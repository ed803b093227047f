use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Wipe the whole localStorage area once the session fails verification
pub fn clear_storage() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.clear();
    }
}
