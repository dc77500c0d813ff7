//! Theme preference and the pre-paint theme script.
//!
//! The script and [`ThemePreference::resolve`] implement the same rule so the
//! class applied before first paint matches what the client computes later.

use serde::{Deserialize, Serialize};

/// localStorage key of the persisted preference.
pub const THEME_STORAGE_KEY: &str = "cinetron-theme";

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// What the user asked for.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// What actually gets applied.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        }
    }

    /// Unknown or missing values mean "follow the system".
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemePreference::Light,
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::System,
        }
    }

    pub fn resolve(&self, prefers_dark: bool) -> ResolvedTheme {
        match self {
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::System if prefers_dark => ResolvedTheme::Dark,
            ThemePreference::System => ResolvedTheme::Light,
        }
    }

    /// Light → Dark → System → Light.
    pub fn next(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::System,
            ThemePreference::System => ThemePreference::Light,
        }
    }

    pub fn all() -> [ThemePreference; 3] {
        [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ]
    }
}

impl ResolvedTheme {
    /// Class put on `<html>`; also the `color-scheme` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            ResolvedTheme::Light => ResolvedTheme::Dark,
            ResolvedTheme::Dark => ResolvedTheme::Light,
        }
    }
}

/// Media query used to detect the system preference.
pub fn dark_media_query() -> &'static str {
    DARK_QUERY
}

/// Body of the inline script that applies the theme before first paint.
///
/// Only touches localStorage, `matchMedia` and the root element. Storage
/// errors (private mode, disabled cookies) leave the default styling.
pub fn theme_script() -> String {
    format!(
        "(function(){{try{{\
var p=window.localStorage.getItem('{key}');\
var d=p==='dark'||(p!=='light'&&window.matchMedia('{query}').matches);\
var t=d?'dark':'light';\
var r=document.documentElement;\
r.classList.remove(d?'light':'dark');\
r.classList.add(t);\
r.style.colorScheme=t;\
r.setAttribute('data-theme',t);\
}}catch(e){{}}}})();",
        key = THEME_STORAGE_KEY,
        query = DARK_QUERY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_resolve() {
        assert_eq!(ThemePreference::parse(Some("dark")), ThemePreference::Dark);
        assert_eq!(ThemePreference::parse(Some("light")), ThemePreference::Light);
        assert_eq!(ThemePreference::parse(Some("neon")), ThemePreference::System);
        assert_eq!(ThemePreference::parse(None), ThemePreference::System);

        assert_eq!(ThemePreference::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(ThemePreference::Dark.resolve(false), ResolvedTheme::Dark);
        assert_eq!(ThemePreference::System.resolve(true), ResolvedTheme::Dark);
        assert_eq!(ThemePreference::System.resolve(false), ResolvedTheme::Light);
    }

    #[test]
    fn test_cycle_visits_every_preference() {
        let mut pref = ThemePreference::Light;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(pref);
            pref = pref.next();
        }
        assert_eq!(pref, ThemePreference::Light);
        assert_eq!(seen, ThemePreference::all().to_vec());
    }

    #[test]
    fn test_script_reads_storage_key_and_media_query() {
        let script = theme_script();
        assert!(script.contains("getItem('cinetron-theme')"));
        assert!(script.contains("(prefers-color-scheme: dark)"));
        assert!(script.contains("try{"));
        assert!(!script.contains("</script"));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&ThemePreference::System).unwrap(),
            "\"system\""
        );
    }
}
