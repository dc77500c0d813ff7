//! Thin wrappers over `window.localStorage`.
//!
//! Storage can be missing (private mode, disabled cookies); every helper
//! degrades to "nothing stored".

use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Returns `false` when nothing was written.
pub fn set(key: &str, value: &str) -> bool {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, '{}' not written", key);
        return false;
    };
    if storage.set_item(key, value).is_err() {
        log::warn!("localStorage write failed for '{}'", key);
        return false;
    }
    true
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn get_json<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed '{}' in localStorage: {}", key, e);
            None
        }
    }
}

pub fn set_json<T: serde::Serialize>(key: &str, value: &T) -> bool {
    match serde_json::to_string(value) {
        Ok(raw) => set(key, &raw),
        Err(e) => {
            log::warn!("Cannot serialize '{}': {}", key, e);
            false
        }
    }
}
