//! Root shell renderer.
//!
//! Produces the complete document around a page: `<html>` root, head with
//! metadata/viewport/hints/pre-paint hooks, and a body that carries the same
//! chrome mount points on every page.
//!
//! ```text
//! <html lang>
//!   <head> meta, links, fonts, shell styles, pre-paint scripts </head>
//!   <body>
//!     auth-sync > app-providers > #shell
//!       background | navbar | settings-modal | notifications | <main> | perf
//!   </body>
//! </html>
//! ```

pub mod body;
pub mod head;
pub mod hooks;
pub mod markup;
pub mod styles;

use std::sync::Arc;

use contracts::shell::{ShellConfig, DOCUMENT_LANG};
use leptos::prelude::*;

use hooks::PrePaintHook;
use markup::Markup;

/// One page rendered through the shell.
#[derive(Debug, Clone)]
pub struct Page {
    /// Page title, passed through the title template.
    pub title: Option<String>,
    pub content: Markup,
}

impl Page {
    pub fn new(content: Markup) -> Self {
        Self {
            title: None,
            content,
        }
    }

    pub fn titled(title: impl Into<String>, content: Markup) -> Self {
        Self {
            title: Some(title.into()),
            content,
        }
    }
}

pub struct RootShell {
    config: Arc<ShellConfig>,
    pre_paint: Vec<Box<dyn PrePaintHook>>,
    client_entry: Option<String>,
}

impl RootShell {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config: Arc::new(config),
            pre_paint: Vec::new(),
            client_entry: None,
        }
    }

    pub fn with_hook(mut self, hook: impl PrePaintHook + 'static) -> Self {
        self.pre_paint.push(Box::new(hook));
        self
    }

    /// Module script that boots the client, e.g. `/pkg/frontend.js`.
    pub fn with_client_entry(mut self, entry: Option<String>) -> Self {
        self.client_entry = entry.filter(|e| !e.trim().is_empty());
        self
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Render the full document. Single pass, no failure modes.
    pub fn render(&self, page: &Page) -> String {
        let owner = Owner::new_root(None);
        owner.with(|| {
            let head = head::shell_head(&self.config, page.title.as_deref(), &self.pre_paint);
            let body = body::shell_body(page.content.clone(), self.client_entry.clone());
            view! {
                <!DOCTYPE html>
                <html lang=DOCUMENT_LANG data-suppress-hydration-warning=true>
                    {head}
                    {body}
                </html>
            }
            .to_html()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shell::metadata::Verification;
    use contracts::shell::mounts;
    use hooks::ThemeInitHook;

    fn shell() -> RootShell {
        RootShell::new(ShellConfig::cinetron(
            "http://localhost:3000",
            Verification::default(),
        ))
        .with_hook(ThemeInitHook)
        .with_client_entry(Some("/pkg/frontend.js".to_string()))
    }

    fn head_of(doc: &str) -> &str {
        let end = doc.find("</head>").expect("head end");
        &doc[..end]
    }

    fn hint_tags(doc: &str) -> Vec<&str> {
        head_of(doc)
            .split('<')
            .filter(|tag| tag.starts_with("link"))
            .filter(|tag| tag.contains(r#"rel="preconnect""#) || tag.contains(r#"rel="preload""#))
            .collect()
    }

    #[test]
    fn test_each_mount_exactly_once_and_content_once() {
        let content = r#"<section id="probe">Blade Runner 2049</section>"#;
        let doc = shell().render(&Page::new(Markup::trusted(content)));

        for name in mounts::ALL {
            let attr = format!(r#"data-mount="{name}""#);
            assert_eq!(doc.matches(&attr).count(), 1, "mount {name}");
        }
        assert_eq!(doc.matches("<main").count(), 1);
        assert_eq!(doc.matches(content).count(), 1);

        let main_start = doc.find("<main").unwrap();
        let main_end = doc.find("</main>").unwrap();
        let inside = &doc[main_start..main_end];
        assert!(inside.contains(content));
    }

    #[test]
    fn test_theme_script_precedes_body() {
        let doc = shell().render(&Page::new(Markup::text("hello")));
        let script = doc.find(r#"<script id="theme-init">"#).expect("theme script");
        let body = doc.find("<body").expect("body");
        assert!(script < body);
        assert!(script < doc.find("</head>").unwrap());
    }

    #[test]
    fn test_head_hints_independent_of_content() {
        let shell = shell();
        let a = shell.render(&Page::new(Markup::trusted("<p>first</p>")));
        let b = shell.render(&Page::titled("Other", Markup::text("second <page>")));

        assert_eq!(hint_tags(&a), hint_tags(&b));
        // 4 preconnects, the hero image and two font faces.
        assert_eq!(hint_tags(&a).len(), 7);

        // Same title → byte-identical head.
        let c = shell.render(&Page::new(Markup::text("third")));
        assert_eq!(head_of(&a), head_of(&c));
    }

    #[test]
    fn test_document_root() {
        let doc = shell().render(&Page::new(Markup::text("x")));
        assert!(doc.starts_with("<!DOCTYPE html>"));
        let root = doc.find("<html").expect("html root");
        let root_tag = &doc[root..root + doc[root..].find('>').expect("root tag end")];
        assert!(root_tag.contains(r#"lang="en""#));
        assert!(root_tag.contains("data-suppress-hydration-warning"));
        assert!(doc.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_provider_wrappers_order() {
        let doc = shell().render(&Page::new(Markup::text("x")));
        let auth = doc.find(r#"data-provider="auth-sync""#).unwrap();
        let providers = doc.find(r#"data-provider="app-providers""#).unwrap();
        let background = doc.find(r#"class="shell-background""#).unwrap();
        let navbar = doc.find(r#"data-mount="navbar""#).unwrap();
        let modal = doc.find(r#"data-mount="settings-modal""#).unwrap();
        let toasts = doc.find(r#"data-mount="notifications""#).unwrap();
        let main = doc.find("<main").unwrap();
        assert!(auth < providers);
        assert!(providers < background);
        assert!(background < navbar && navbar < modal && modal < toasts && toasts < main);
    }

    #[test]
    fn test_client_entry_optional() {
        let doc = shell().render(&Page::new(Markup::text("x")));
        assert!(doc.contains("import init from '/pkg/frontend.js'; init();"));

        let bare = RootShell::new(ShellConfig::cinetron(
            "http://localhost:3000",
            Verification::default(),
        ))
        .with_client_entry(Some("  ".to_string()));
        let doc = bare.render(&Page::new(Markup::text("x")));
        assert!(!doc.contains("type=\"module\""));
        assert!(!doc.contains("theme-init"));
    }

    #[test]
    fn test_background_is_styled() {
        let doc = shell().render(&Page::new(Markup::text("x")));
        let styles = doc.find(".shell-background {").expect("background rule");
        let element = doc.find(r#"class="shell-background""#).expect("background element");
        assert!(styles < doc.find("</head>").unwrap());
        assert!(element > doc.find("<body").unwrap());
        for class in ["shell-body", "shell-frame", "shell-main"] {
            assert!(doc.contains(&format!(".{class} ")), "no rule for .{class}");
        }
    }

    #[test]
    fn test_text_content_is_escaped() {
        let doc = shell().render(&Page::new(Markup::text("<img src=x onerror=alert(1)>")));
        assert!(doc.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }
}
