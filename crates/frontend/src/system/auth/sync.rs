//! Session sync: keeps [`IdentityContext`] equal to the persisted session,
//! including changes made in other tabs.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use super::context::IdentityContext;
use super::storage;

/// Wrapper element rendered by the server around the providers.
const AUTH_SYNC_SELECTOR: &str = "[data-provider=\"auth-sync\"]";

#[derive(Clone, Copy)]
pub struct SessionSync {
    identity: IdentityContext,
}

impl SessionSync {
    /// Initial sync plus a `storage` listener for cross-tab changes.
    pub fn start(identity: IdentityContext) -> Self {
        let sync = Self { identity };
        sync.reload();
        sync.listen();
        sync.reflect_on_wrapper();
        sync
    }

    pub fn identity(&self) -> IdentityContext {
        self.identity
    }

    fn reload(&self) {
        let profile = storage::get_profile();
        log::debug!(
            "Session synced: {}",
            profile.as_ref().map(|p| p.username.as_str()).unwrap_or("anonymous")
        );
        self.identity.set_user(profile);
    }

    fn listen(&self) {
        let Some(window) = window() else {
            return;
        };
        let sync = *self;
        let on_storage = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
            move |event: web_sys::StorageEvent| {
                if storage::affects_session(event.key().as_deref()) {
                    sync.reload();
                }
            },
        );
        if window
            .add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("Cannot listen for session changes in other tabs");
        }
        on_storage.forget();
    }

    /// Mirror the session status on the server-rendered wrapper for styling.
    fn reflect_on_wrapper(&self) {
        let identity = self.identity;
        Effect::new(move |_| {
            let status = identity.status();
            let wrapper = window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(AUTH_SYNC_SELECTOR).ok().flatten());
            if let Some(wrapper) = wrapper {
                let _ = wrapper.set_attribute("data-session", status.as_str());
            }
        });
    }
}
