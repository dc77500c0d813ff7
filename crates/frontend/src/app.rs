//! Client side of the root shell.
//!
//! Providers are explicit capability objects, built outer to inner and handed
//! to every collaborator mounted into the server-rendered mount points:
//!
//! ```text
//! IdentityContext -> SessionSync -> AppProviders { theme, settings, notifications }
//!     -> ShellCapabilities -> Navbar | SettingsModal | NotificationToast | PerformanceMonitor
//! ```

use contracts::shell::mounts;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::layout::navbar::Navbar;
use crate::layout::settings_modal::SettingsModal;
use crate::layout::ModalService;
use crate::shared::notifications::toast::NotificationToast;
use crate::shared::notifications::Notifications;
use crate::shared::settings::SettingsStore;
use crate::shared::theme::ThemeContext;
use crate::system::auth::context::IdentityContext;
use crate::system::auth::sync::SessionSync;
use crate::system::vitals::PerformanceMonitor;

/// Theme, settings and notifications.
#[derive(Clone, Copy)]
pub struct AppProviders {
    pub theme: ThemeContext,
    pub settings: SettingsStore,
    pub notifications: Notifications,
}

impl AppProviders {
    /// Requires a synced session: providers may depend on who is signed in.
    pub fn new(_session: SessionSync) -> Self {
        let theme = ThemeContext::load();
        let settings = SettingsStore::load(theme.preference_untracked());
        let providers = Self {
            theme,
            settings,
            notifications: Notifications::new(),
        };
        providers.reflect_motion_preference();
        providers
    }

    fn reflect_motion_preference(&self) {
        let settings = self.settings;
        Effect::new(move |_| {
            let reduce = settings.reduce_motion();
            if let Some(root) = document().document_element() {
                let _ = root.set_attribute("data-reduce-motion", if reduce { "true" } else { "false" });
            }
        });
    }
}

/// Everything a chrome component may use.
#[derive(Clone, Copy)]
pub struct ShellCapabilities {
    pub identity: IdentityContext,
    pub theme: ThemeContext,
    pub settings: SettingsStore,
    pub notifications: Notifications,
    pub modal: ModalService,
}

impl ShellCapabilities {
    /// Build the provider chain in order.
    pub fn compose() -> Self {
        let identity = IdentityContext::new();
        let session = SessionSync::start(identity);
        let providers = AppProviders::new(session);

        Self {
            identity: session.identity(),
            theme: providers.theme,
            settings: providers.settings,
            notifications: providers.notifications,
            modal: ModalService::new(),
        }
    }
}

fn find_mount(name: &str) -> Option<web_sys::HtmlElement> {
    let element = document()
        .query_selector(&mounts::selector(name))
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
    if element.is_none() {
        log::warn!("Mount point '{}' not found; skipping", name);
    }
    element
}

/// Compose the capabilities and mount every collaborator.
///
/// A missing mount point skips that collaborator only.
pub fn mount_shell() {
    let owner = Owner::new();
    owner.with(|| {
        let caps = ShellCapabilities::compose();

        if let Some(el) = find_mount(mounts::NAVBAR) {
            leptos::mount::mount_to(el, move || view! { <Navbar caps=caps /> }).forget();
        }
        if let Some(el) = find_mount(mounts::SETTINGS_MODAL) {
            leptos::mount::mount_to(el, move || view! { <SettingsModal caps=caps /> }).forget();
        }
        if let Some(el) = find_mount(mounts::NOTIFICATIONS) {
            let notifications = caps.notifications;
            leptos::mount::mount_to(el, move || {
                view! { <NotificationToast notifications=notifications /> }
            })
            .forget();
        }
        if let Some(el) = find_mount(mounts::PERFORMANCE_MONITOR) {
            leptos::mount::mount_to(el, || view! { <PerformanceMonitor /> }).forget();
        }

        log::info!("Root shell mounted");
    });
    // The shell lives as long as the page.
    std::mem::forget(owner);
}
