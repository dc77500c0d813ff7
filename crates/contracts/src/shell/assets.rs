//! Static head hints: preconnects, icons, PWA meta tags and preloads.

use serde::{Deserialize, Serialize};

use super::viewport::BRAND_LIGHT;

pub const MANIFEST_PATH: &str = "/manifest.json";
pub const BROWSER_CONFIG_PATH: &str = "/browserconfig.xml";
pub const HERO_IMAGE_PATH: &str = "/hero-background.jpg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preconnect {
    pub href: String,
    /// `Some("anonymous")` for font files.
    pub crossorigin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconLink {
    pub rel: String,
    pub href: String,
    pub sizes: Option<String>,
    pub mime: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preload {
    pub href: String,
    pub as_kind: String,
    pub mime: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

/// Head links that never depend on the page being rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadHints {
    pub preconnects: Vec<Preconnect>,
    pub icons: Vec<IconLink>,
    pub manifest: String,
    pub pwa: Vec<MetaTag>,
    pub preloads: Vec<Preload>,
}

fn preconnect(href: &str, crossorigin: Option<&str>) -> Preconnect {
    Preconnect {
        href: href.to_string(),
        crossorigin: crossorigin.map(str::to_string),
    }
}

fn icon(rel: &str, href: &str, sizes: Option<&str>, mime: Option<&str>) -> IconLink {
    IconLink {
        rel: rel.to_string(),
        href: href.to_string(),
        sizes: sizes.map(str::to_string),
        mime: mime.map(str::to_string),
    }
}

fn meta(name: &str, content: &str) -> MetaTag {
    MetaTag {
        name: name.to_string(),
        content: content.to_string(),
    }
}

impl Default for HeadHints {
    fn default() -> Self {
        Self {
            preconnects: vec![
                // movie posters
                preconnect("https://image.tmdb.org", None),
                // movie data API
                preconnect("https://api.themoviedb.org", None),
                preconnect("https://fonts.googleapis.com", None),
                preconnect("https://fonts.gstatic.com", Some("anonymous")),
            ],
            icons: vec![
                icon("icon", "/favicon.ico", Some("32x32"), None),
                icon("icon", "/favicon.svg", None, Some("image/svg+xml")),
                icon("apple-touch-icon", "/apple-touch-icon.png", None, None),
            ],
            manifest: MANIFEST_PATH.to_string(),
            pwa: vec![
                meta("application-name", "Cinetron"),
                meta("apple-mobile-web-app-capable", "yes"),
                meta("apple-mobile-web-app-status-bar-style", "default"),
                meta("apple-mobile-web-app-title", "Cinetron"),
                meta("mobile-web-app-capable", "yes"),
                meta("msapplication-config", BROWSER_CONFIG_PATH),
                meta("msapplication-TileColor", BRAND_LIGHT),
            ],
            preloads: vec![Preload {
                href: HERO_IMAGE_PATH.to_string(),
                as_kind: "image".to_string(),
                mime: Some("image/jpeg".to_string()),
            }],
        }
    }
}

impl HeadHints {
    pub fn pwa_value(&self, name: &str) -> Option<&str> {
        self.pwa
            .iter()
            .find(|tag| tag.name == name)
            .map(|tag| tag.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preconnect_domains() {
        let hints = HeadHints::default();
        let hosts: Vec<&str> = hints.preconnects.iter().map(|p| p.href.as_str()).collect();
        assert_eq!(
            hosts,
            vec![
                "https://image.tmdb.org",
                "https://api.themoviedb.org",
                "https://fonts.googleapis.com",
                "https://fonts.gstatic.com",
            ]
        );
        assert_eq!(
            hints.preconnects[3].crossorigin.as_deref(),
            Some("anonymous")
        );
    }

    #[test]
    fn test_single_hero_preload() {
        let hints = HeadHints::default();
        assert_eq!(hints.preloads.len(), 1);
        assert_eq!(hints.preloads[0].href, "/hero-background.jpg");
        assert_eq!(hints.preloads[0].as_kind, "image");
    }

    #[test]
    fn test_tile_color_matches_brand() {
        let hints = HeadHints::default();
        assert_eq!(hints.pwa_value("msapplication-TileColor"), Some("#f46e0c"));
        assert_eq!(hints.pwa_value("msapplication-config"), Some("/browserconfig.xml"));
        assert_eq!(hints.pwa_value("missing"), None);
    }
}
