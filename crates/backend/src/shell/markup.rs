//! Page content handed to the shell.

use contracts::shell::mounts;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// Server-authored markup, emitted as is.
    Trusted(String),
    /// Plain text, escaped by the renderer.
    Text(String),
}

impl Markup {
    pub fn trusted(html: impl Into<String>) -> Self {
        Markup::Trusted(html.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Markup::Text(text.into())
    }

    /// The `<main>` landmark holding this content.
    pub fn into_main(self) -> AnyView {
        match self {
            Markup::Trusted(html) => view! {
                <main id=mounts::MAIN_ID class="shell-main" inner_html=html></main>
            }
            .into_any(),
            Markup::Text(text) => view! {
                <main id=mounts::MAIN_ID class="shell-main">{text}</main>
            }
            .into_any(),
        }
    }
}
