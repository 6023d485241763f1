//! localStorage access and the token store built on it.

use msgdesk::TokenStore;
use wasm_bindgen::prelude::*;

/// Static wrappers over `window.localStorage`. Every call tolerates a
/// missing window or disabled storage.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// `false` if the write was refused (quota, private mode).
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

/// Session token persisted in localStorage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self, key: &str) -> Option<String> {
        LocalStorage::get(key)
    }

    fn save(&self, key: &str, value: &str) -> bool {
        LocalStorage::set(key, value)
    }

    fn remove(&self, key: &str) -> bool {
        LocalStorage::delete(key)
    }
}

/// Listen for localStorage writes made by other tabs. The callback gets the
/// changed key, or `None` when storage was cleared.
///
/// The listener lives as long as the page.
pub fn on_storage_change<F>(callback: F)
where
    F: Fn(Option<String>) + 'static,
{
    let closure = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
        callback(ev.key());
    });

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
