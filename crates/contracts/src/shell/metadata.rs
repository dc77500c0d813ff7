//! SEO metadata descriptor of the site.

use serde::{Deserialize, Serialize};

pub const SITE_NAME: &str = "Cinetron Premium";
pub const DEFAULT_TITLE: &str = "Cinetron - Premium Movie Experience";
pub const TITLE_TEMPLATE: &str = "%s | Cinetron Premium";

const DESCRIPTION: &str = "Discover movies like never before. Cinetron offers a premium cinematic experience with AI-powered recommendations, 3D movie posters, and immersive social features.";
const SOCIAL_DESCRIPTION: &str = "Discover movies like never before with AI-powered recommendations and immersive 3D experiences.";

const KEYWORDS: [&str; 12] = [
    "movies",
    "cinema",
    "films",
    "entertainment",
    "movie database",
    "movie recommendations",
    "movie reviews",
    "watch movies",
    "movie trailers",
    "premium cinema",
    "3D movie posters",
    "AI recommendations",
];

/// Default title plus the template applied to page titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleTemplate {
    pub default: String,
    /// Must contain a single `%s` placeholder.
    pub template: String,
}

impl TitleTemplate {
    /// Title for a page; blank or missing page titles give the default.
    pub fn render(&self, page: Option<&str>) -> String {
        match page.map(str::trim) {
            Some(title) if !title.is_empty() => self.template.replacen("%s", title, 1),
            _ => self.default.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormatDetection {
    pub email: bool,
    pub address: bool,
    pub telephone: bool,
}

impl FormatDetection {
    /// Content of `<meta name="format-detection">`, `None` when everything is enabled.
    pub fn content(&self) -> Option<String> {
        let disabled: Vec<&str> = [
            ("telephone", self.telephone),
            ("address", self.address),
            ("email", self.email),
        ]
        .into_iter()
        .filter(|(_, enabled)| !enabled)
        .map(|(name, _)| name)
        .collect();

        if disabled.is_empty() {
            None
        } else {
            Some(
                disabled
                    .iter()
                    .map(|name| format!("{name}=no"))
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialImage {
    /// Site-relative or absolute.
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraph {
    pub kind: String,
    pub locale: String,
    pub url: String,
    pub site_name: String,
    pub title: String,
    pub description: String,
    pub images: Vec<SocialImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub creator: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePreview {
    None,
    Standard,
    Large,
}

impl ImagePreview {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImagePreview::None => "none",
            ImagePreview::Standard => "standard",
            ImagePreview::Large => "large",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    /// `-1` means no limit.
    pub max_video_preview: i32,
    pub max_image_preview: ImagePreview,
    /// `-1` means no limit.
    pub max_snippet: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub google_bot: GoogleBot,
}

fn index_follow(index: bool, follow: bool) -> [&'static str; 2] {
    [
        if index { "index" } else { "noindex" },
        if follow { "follow" } else { "nofollow" },
    ]
}

impl Robots {
    /// Content of `<meta name="robots">`.
    pub fn content(&self) -> String {
        index_follow(self.index, self.follow).join(", ")
    }

    /// Content of `<meta name="googlebot">`.
    pub fn google_bot_content(&self) -> String {
        let bot = &self.google_bot;
        let mut parts: Vec<String> = index_follow(bot.index, bot.follow)
            .iter()
            .map(|s| s.to_string())
            .collect();
        parts.push(format!("max-video-preview:{}", bot.max_video_preview));
        parts.push(format!("max-image-preview:{}", bot.max_image_preview.as_str()));
        parts.push(format!("max-snippet:{}", bot.max_snippet));
        parts.join(", ")
    }
}

/// Site ownership tokens. Supplied by configuration, never hard-coded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    #[serde(default)]
    pub google: Option<String>,
    #[serde(default)]
    pub yandex: Option<String>,
    #[serde(default)]
    pub yahoo: Option<String>,
}

impl Verification {
    /// `(meta name, token)` pairs for every configured, non-blank token.
    pub fn tags(&self) -> Vec<(&'static str, &str)> {
        [
            ("google-site-verification", self.google.as_deref()),
            ("yandex-verification", self.yandex.as_deref()),
            ("y_key", self.yahoo.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, token)| {
            token
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(|t| (name, t))
        })
        .collect()
    }
}

/// Static metadata record emitted into every document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub title: TitleTemplate,
    pub description: String,
    pub keywords: Vec<String>,
    pub authors: Vec<Author>,
    pub creator: String,
    pub publisher: String,
    pub category: String,
    pub format_detection: FormatDetection,
    /// Site-relative canonical path.
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
    pub verification: Verification,
}

impl SiteMetadata {
    pub fn cinetron(base_url: &str, verification: Verification) -> Self {
        Self {
            title: TitleTemplate {
                default: DEFAULT_TITLE.to_string(),
                template: TITLE_TEMPLATE.to_string(),
            },
            description: DESCRIPTION.to_string(),
            keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
            authors: vec![Author {
                name: "Cinetron Team".to_string(),
            }],
            creator: SITE_NAME.to_string(),
            publisher: "Cinetron".to_string(),
            category: "entertainment".to_string(),
            format_detection: FormatDetection::default(),
            canonical: "/".to_string(),
            open_graph: OpenGraph {
                kind: "website".to_string(),
                locale: "en_US".to_string(),
                url: base_url.to_string(),
                site_name: SITE_NAME.to_string(),
                title: DEFAULT_TITLE.to_string(),
                description: SOCIAL_DESCRIPTION.to_string(),
                images: vec![SocialImage {
                    url: "/og-image.jpg".to_string(),
                    width: 1200,
                    height: 630,
                    alt: DEFAULT_TITLE.to_string(),
                }],
            },
            twitter: TwitterCard {
                card: "summary_large_image".to_string(),
                title: DEFAULT_TITLE.to_string(),
                description: SOCIAL_DESCRIPTION.to_string(),
                images: vec!["/twitter-image.jpg".to_string()],
                creator: "@Cinetron".to_string(),
            },
            robots: Robots {
                index: true,
                follow: true,
                google_bot: GoogleBot {
                    index: true,
                    follow: true,
                    max_video_preview: -1,
                    max_image_preview: ImagePreview::Large,
                    max_snippet: -1,
                },
            },
            verification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> SiteMetadata {
        SiteMetadata::cinetron("http://localhost:3000", Verification::default())
    }

    #[test]
    fn test_title_default_and_template() {
        let meta = metadata();
        assert_eq!(meta.title.default, "Cinetron - Premium Movie Experience");
        assert!(meta.title.template.contains("| Cinetron Premium"));
        assert_eq!(meta.title.render(None), meta.title.default);
        assert_eq!(meta.title.render(Some("   ")), meta.title.default);
        assert_eq!(meta.title.render(Some("Dune")), "Dune | Cinetron Premium");
    }

    #[test]
    fn test_keywords() {
        let meta = metadata();
        assert_eq!(meta.keywords.len(), 12);
        assert_eq!(meta.keywords.first().map(String::as_str), Some("movies"));
    }

    #[test]
    fn test_robots_content() {
        let robots = metadata().robots;
        assert_eq!(robots.content(), "index, follow");
        assert_eq!(
            robots.google_bot_content(),
            "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1"
        );
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            FormatDetection::default().content().as_deref(),
            Some("telephone=no, address=no, email=no")
        );
        let all = FormatDetection {
            email: true,
            address: true,
            telephone: true,
        };
        assert_eq!(all.content(), None);
    }

    #[test]
    fn test_verification_skips_missing_tokens() {
        assert!(Verification::default().tags().is_empty());

        let verification = Verification {
            google: Some("g-token".to_string()),
            yandex: Some("  ".to_string()),
            yahoo: None,
        };
        assert_eq!(
            verification.tags(),
            vec![("google-site-verification", "g-token")]
        );
    }
}
