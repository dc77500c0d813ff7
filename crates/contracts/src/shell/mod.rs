//! Root shell configuration.
//!
//! Everything here is resolved once at startup and never mutated. The server
//! turns it into head tags, the client reads the parts it needs (theme keys,
//! settings defaults).

pub mod assets;
pub mod base_url;
pub mod fonts;
pub mod metadata;
pub mod mounts;
pub mod settings;
pub mod theme;
pub mod viewport;

use serde::{Deserialize, Serialize};

use assets::HeadHints;
use fonts::FontSet;
use metadata::{SiteMetadata, Verification};
use viewport::Viewport;

/// Language tag of the document root.
pub const DOCUMENT_LANG: &str = "en";

/// Everything the root shell needs to render a document head.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Resolved public base URL, see [`base_url::resolve_base_url`].
    pub base_url: String,
    pub metadata: SiteMetadata,
    pub viewport: Viewport,
    pub fonts: FontSet,
    pub hints: HeadHints,
}

impl ShellConfig {
    /// Cinetron defaults for the given base URL.
    pub fn cinetron(base_url: impl Into<String>, verification: Verification) -> Self {
        let base_url = base_url.into();
        Self {
            metadata: SiteMetadata::cinetron(&base_url, verification),
            viewport: Viewport::default(),
            fonts: FontSet::default(),
            hints: HeadHints::default(),
            base_url,
        }
    }

    /// Joins a site-relative path onto the base URL.
    pub fn absolute(&self, path: &str) -> String {
        base_url::join(&self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls_follow_base() {
        let shell = ShellConfig::cinetron("https://example.com", Verification::default());
        assert_eq!(shell.absolute("/og-image.jpg"), "https://example.com/og-image.jpg");
        assert_eq!(shell.metadata.open_graph.url, "https://example.com");
    }
}
