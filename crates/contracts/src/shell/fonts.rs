//! Font handles of the shell: body, display and monospace.

use serde::{Deserialize, Serialize};

const GOOGLE_FONTS_CSS: &str = "https://fonts.googleapis.com/css2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontDisplay {
    Auto,
    Swap,
    Fallback,
    Optional,
}

impl FontDisplay {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontDisplay::Auto => "auto",
            FontDisplay::Swap => "swap",
            FontDisplay::Fallback => "fallback",
            FontDisplay::Optional => "optional",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontHandle {
    pub family: String,
    /// CSS custom property bound to the family, e.g. `--font-inter`.
    pub variable: String,
    /// Generic fallback used after the family in the variable value.
    pub fallback: String,
    pub subsets: Vec<String>,
    pub display: FontDisplay,
    pub preload: bool,
}

impl FontHandle {
    fn new(family: &str, variable: &str, fallback: &str, preload: bool) -> Self {
        Self {
            family: family.to_string(),
            variable: variable.to_string(),
            fallback: fallback.to_string(),
            subsets: vec!["latin".to_string()],
            display: FontDisplay::Swap,
            preload,
        }
    }

    /// Stylesheet serving this family alone, so each face can be preloaded
    /// on its own.
    pub fn stylesheet_url(&self) -> String {
        format!(
            "{}?family={}&display={}",
            GOOGLE_FONTS_CSS,
            urlencoding::encode(&self.family).replace("%20", "+"),
            self.display.as_str()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSet {
    pub body: FontHandle,
    pub display: FontHandle,
    pub mono: FontHandle,
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            body: FontHandle::new("Inter", "--font-inter", "sans-serif", true),
            display: FontHandle::new("Playfair Display", "--font-playfair", "serif", true),
            // Code font is not on the critical path.
            mono: FontHandle::new("Fira Code", "--font-fira-code", "monospace", false),
        }
    }
}

impl FontSet {
    pub fn all(&self) -> [&FontHandle; 3] {
        [&self.body, &self.display, &self.mono]
    }

    /// Fonts on the critical path.
    pub fn preloaded(&self) -> impl Iterator<Item = &FontHandle> {
        self.all().into_iter().filter(|font| font.preload)
    }

    /// `:root { --font-x: 'Family', fallback; ... }`
    pub fn css_variables(&self) -> String {
        let declarations: Vec<String> = self
            .all()
            .iter()
            .map(|font| format!("{}: '{}', {};", font.variable, font.family, font.fallback))
            .collect();
        format!(":root {{ {} }}", declarations.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_handles() {
        let fonts = FontSet::default();
        assert_eq!(fonts.body.variable, "--font-inter");
        assert_eq!(fonts.display.variable, "--font-playfair");
        assert_eq!(fonts.mono.variable, "--font-fira-code");
        assert!(fonts.body.preload && fonts.display.preload);
        assert!(!fonts.mono.preload);
    }

    #[test]
    fn test_stylesheet_url_per_family() {
        let fonts = FontSet::default();
        assert_eq!(
            fonts.display.stylesheet_url(),
            "https://fonts.googleapis.com/css2?family=Playfair+Display&display=swap"
        );
        assert_eq!(
            fonts.mono.stylesheet_url(),
            "https://fonts.googleapis.com/css2?family=Fira+Code&display=swap"
        );
    }

    #[test]
    fn test_preload_flag_is_per_font() {
        let mut fonts = FontSet::default();
        let families: Vec<&str> = fonts.preloaded().map(|f| f.family.as_str()).collect();
        assert_eq!(families, vec!["Inter", "Playfair Display"]);

        fonts.display.preload = false;
        fonts.mono.preload = true;
        let families: Vec<&str> = fonts.preloaded().map(|f| f.family.as_str()).collect();
        assert_eq!(families, vec!["Inter", "Fira Code"]);
    }

    #[test]
    fn test_css_variables() {
        let css = FontSet::default().css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--font-playfair: 'Playfair Display', serif;"));
    }
}
