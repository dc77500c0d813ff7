//! Theme capability.
//!
//! The inline head script already applied the theme before first paint; this
//! context takes over afterwards using the same resolution rule, persists the
//! preference and follows system changes while the preference is `System`.

use contracts::shell::theme::{dark_media_query, ResolvedTheme, ThemePreference, THEME_STORAGE_KEY};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::shared::storage;

fn dark_media() -> Option<web_sys::MediaQueryList> {
    window()?.match_media(dark_media_query()).ok()?
}

fn system_prefers_dark() -> bool {
    dark_media().map(|mql| mql.matches()).unwrap_or(false)
}

/// Put the resolved theme on `<html>`, same as the pre-paint script.
fn apply_theme(theme: ResolvedTheme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let class_list = root.class_list();
    let _ = class_list.remove_1(theme.opposite().as_str());
    let _ = class_list.add_1(theme.as_str());
    let _ = root.set_attribute("data-theme", theme.as_str());

    if let Ok(html) = root.dyn_into::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("color-scheme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    preference: RwSignal<ThemePreference>,
    system_dark: RwSignal<bool>,
}

impl ThemeContext {
    /// Load the persisted preference and start applying it.
    pub fn load() -> Self {
        let stored = storage::get(THEME_STORAGE_KEY);
        let ctx = Self {
            preference: RwSignal::new(ThemePreference::parse(stored.as_deref())),
            system_dark: RwSignal::new(system_prefers_dark()),
        };

        Effect::new(move |_| apply_theme(ctx.resolved()));
        ctx.watch_system();
        ctx
    }

    fn watch_system(&self) {
        let Some(mql) = dark_media() else {
            return;
        };
        let system_dark = self.system_dark;
        let query = mql.clone();
        let on_change = Closure::<dyn FnMut()>::new(move || {
            system_dark.set(query.matches());
        });
        mql.set_onchange(Some(on_change.as_ref().unchecked_ref()));
        // Lives as long as the page.
        on_change.forget();
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference.get()
    }

    pub fn preference_untracked(&self) -> ThemePreference {
        self.preference.get_untracked()
    }

    pub fn resolved(&self) -> ResolvedTheme {
        self.preference.get().resolve(self.system_dark.get())
    }

    pub fn set_preference(&self, preference: ThemePreference) {
        self.preference.set(preference);
        storage::set(THEME_STORAGE_KEY, preference.as_str());
        log::debug!("Theme preference set to {}", preference.as_str());
    }

    pub fn cycle(&self) {
        self.set_preference(self.preference_untracked().next());
    }
}

/// Theme toggle button for the navbar.
#[component]
pub fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    let label = move || format!("Theme: {}", theme.preference().display_name());
    let icon = move || match theme.preference() {
        ThemePreference::Light => "☀",
        ThemePreference::Dark => "☾",
        ThemePreference::System => "◐",
    };

    view! {
        <button
            class="navbar__icon-btn"
            title=label
            aria-label=label
            on:click=move |_| theme.cycle()
        >
            {icon}
        </button>
    }
}
