use serde::{Deserialize, Serialize};

use super::theme::ThemePreference;

/// localStorage key of the persisted [`UserSettings`].
pub const SETTINGS_STORAGE_KEY: &str = "cinetron-settings";

/// Content regions offered in the settings modal.
pub const REGIONS: [(&str, &str); 4] = [
    ("US", "United States"),
    ("GB", "United Kingdom"),
    ("DE", "Germany"),
    ("IN", "India"),
];

/// Preferences edited through the settings modal.
///
/// Every field has a default so older stored blobs keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub theme: ThemePreference,
    pub reduce_motion: bool,
    pub autoplay_trailers: bool,
    pub region: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            reduce_motion: false,
            autoplay_trailers: true,
            region: "US".to_string(),
        }
    }
}

impl UserSettings {
    /// Parse a stored blob, falling back to defaults on garbage.
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|s| serde_json::from_str::<UserSettings>(s).ok())
            .map(UserSettings::normalized)
            .unwrap_or_default()
    }

    /// Unknown regions are replaced with the default one.
    pub fn normalized(mut self) -> Self {
        if !REGIONS.iter().any(|(code, _)| *code == self.region) {
            self.region = UserSettings::default().region;
        }
        self
    }

    /// Whether `code` is the region option to show as selected.
    pub fn is_region(&self, code: &str) -> bool {
        self.region == code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored_garbage_gives_defaults() {
        assert_eq!(UserSettings::from_stored(None), UserSettings::default());
        assert_eq!(UserSettings::from_stored(Some("{oops")), UserSettings::default());
    }

    #[test]
    fn test_from_stored_partial_blob() {
        let settings = UserSettings::from_stored(Some(r#"{"theme":"dark","region":"DE"}"#));
        assert_eq!(settings.theme, ThemePreference::Dark);
        assert_eq!(settings.region, "DE");
        assert!(settings.autoplay_trailers);
    }

    #[test]
    fn test_unknown_region_is_normalized() {
        let settings = UserSettings::from_stored(Some(r#"{"region":"XX"}"#));
        assert_eq!(settings.region, "US");
    }

    #[test]
    fn test_exactly_one_region_selected() {
        let settings = UserSettings::from_stored(Some(r#"{"region":"DE"}"#));
        let selected: Vec<&str> = REGIONS
            .iter()
            .map(|(code, _)| *code)
            .filter(|code| settings.is_region(code))
            .collect();
        assert_eq!(selected, vec!["DE"]);
    }
}
