//! Files derived from the shell configuration: PWA manifest, Windows tile
//! config and robots.txt.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use contracts::shell::viewport::BRAND_LIGHT;
use contracts::shell::ShellConfig;
use serde_json::json;

use crate::routes::AppState;
use crate::shared::error::AppError;

pub fn manifest_json(config: &ShellConfig) -> Result<String, AppError> {
    let meta = &config.metadata;
    let icons: Vec<serde_json::Value> = config
        .hints
        .icons
        .iter()
        .filter(|icon| icon.href.ends_with(".svg") || icon.href.ends_with(".png"))
        .map(|icon| {
            let mime = icon.mime.clone().unwrap_or_else(|| "image/png".to_string());
            let sizes = if icon.href.ends_with(".svg") { "any" } else { "180x180" };
            json!({ "src": icon.href, "type": mime, "sizes": sizes })
        })
        .collect();

    let manifest = json!({
        "name": meta.open_graph.site_name,
        "short_name": meta.publisher,
        "description": meta.open_graph.description,
        "start_url": "/",
        "scope": "/",
        "display": "standalone",
        "lang": contracts::shell::DOCUMENT_LANG,
        "categories": [meta.category],
        "theme_color": BRAND_LIGHT,
        "background_color": "#ffffff",
        "icons": icons,
    });
    Ok(serde_json::to_string_pretty(&manifest)?)
}

pub fn browser_config_xml(config: &ShellConfig) -> String {
    let tile_color = config
        .hints
        .pwa_value("msapplication-TileColor")
        .unwrap_or(BRAND_LIGHT);
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<browserconfig>
    <msapplication>
        <tile>
            <square150x150logo src="/apple-touch-icon.png"/>
            <TileColor>{tile_color}</TileColor>
        </tile>
    </msapplication>
</browserconfig>
"#
    )
}

pub fn robots_txt(config: &ShellConfig) -> String {
    let robots = &config.metadata.robots;
    let rule = if robots.index { "Allow: /" } else { "Disallow: /" };
    let bot_rule = if robots.google_bot.index {
        "Allow: /"
    } else {
        "Disallow: /"
    };
    format!(
        "User-agent: Googlebot\n{bot_rule}\n\nUser-agent: *\n{rule}\nDisallow: /api/\n\nHost: {}\n",
        config.base_url
    )
}

/// GET /manifest.json
pub async fn manifest(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = manifest_json(state.shell.config())?;
    Ok(([(header::CONTENT_TYPE, "application/manifest+json")], body))
}

/// GET /browserconfig.xml
pub async fn browser_config(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml")],
        browser_config_xml(state.shell.config()),
    )
}

/// GET /robots.txt
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(state.shell.config()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shell::metadata::Verification;

    fn config() -> ShellConfig {
        ShellConfig::cinetron("https://example.com", Verification::default())
    }

    #[test]
    fn test_manifest_fields() {
        let manifest: serde_json::Value =
            serde_json::from_str(&manifest_json(&config()).unwrap()).unwrap();
        assert_eq!(manifest["name"], "Cinetron Premium");
        assert_eq!(manifest["short_name"], "Cinetron");
        assert_eq!(manifest["theme_color"], "#f46e0c");
        assert_eq!(manifest["icons"].as_array().map(Vec::len), Some(2));
        assert_eq!(manifest["icons"][0]["type"], "image/svg+xml");
    }

    #[test]
    fn test_browser_config_tile_color() {
        let xml = browser_config_xml(&config());
        assert!(xml.contains("<TileColor>#f46e0c</TileColor>"));
    }

    #[test]
    fn test_robots_follow_directives() {
        let txt = robots_txt(&config());
        assert!(txt.contains("User-agent: *\nAllow: /\n"));
        assert!(txt.contains("Host: https://example.com"));

        let mut closed = config();
        closed.metadata.robots.index = false;
        assert!(robots_txt(&closed).contains("User-agent: *\nDisallow: /\n"));
    }
}
