use contracts::shell::settings::{UserSettings, SETTINGS_STORAGE_KEY};
use contracts::shell::theme::ThemePreference;
use leptos::prelude::*;

use crate::shared::storage;

/// Settings capability: current settings plus persistence.
#[derive(Clone, Copy)]
pub struct SettingsStore {
    settings: RwSignal<UserSettings>,
}

impl SettingsStore {
    /// Load persisted settings. The theme key is authoritative for the
    /// theme, since the navbar toggle changes only that key.
    pub fn load(theme: ThemePreference) -> Self {
        let raw = storage::get(SETTINGS_STORAGE_KEY);
        let mut settings = UserSettings::from_stored(raw.as_deref());
        settings.theme = theme;
        Self {
            settings: RwSignal::new(settings),
        }
    }

    pub fn get_untracked(&self) -> UserSettings {
        self.settings.get_untracked()
    }

    pub fn reduce_motion(&self) -> bool {
        self.settings.with(|s| s.reduce_motion)
    }

    /// Apply settings for this page. Returns whether they were persisted too.
    pub fn save(&self, settings: UserSettings) -> bool {
        let settings = settings.normalized();
        let persisted = storage::set_json(SETTINGS_STORAGE_KEY, &settings);
        self.settings.set(settings);
        persisted
    }
}
