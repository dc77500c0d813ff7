//! Document head: metadata, viewport, hints, fonts, shell styles and
//! pre-paint hooks.

use contracts::shell::ShellConfig;
use leptos::html::meta;
use leptos::prelude::*;

use super::hooks::{self, PrePaintHook};
use super::styles::SHELL_CSS;

pub fn shell_head(
    config: &ShellConfig,
    page_title: Option<&str>,
    pre_paint: &[Box<dyn PrePaintHook>],
) -> impl IntoView {
    let title = config.metadata.title.render(page_title);

    let scripts = pre_paint
        .iter()
        .filter_map(|hook| {
            let source = hooks::inline_source(hook.as_ref())?;
            Some(view! { <script id=hook.id() inner_html=source></script> })
        })
        .collect_view();

    view! {
        <head>
            <meta charset="utf-8" />
            <title>{title}</title>
            {metadata_tags(config)}
            {open_graph_tags(config)}
            {twitter_tags(config)}
            {viewport_tags(config)}
            {hint_tags(config)}
            {font_tags(config)}
            <style id="shell-styles" inner_html=SHELL_CSS></style>
            // Last in head, before any body content.
            {scripts}
        </head>
    }
}

fn metadata_tags(config: &ShellConfig) -> impl IntoView {
    let meta = &config.metadata;

    let authors = meta
        .authors
        .iter()
        .map(|author| view! { <meta name="author" content=author.name.clone() /> })
        .collect_view();
    let format_detection = meta
        .format_detection
        .content()
        .map(|content| view! { <meta name="format-detection" content=content /> });
    let verification = meta
        .verification
        .tags()
        .into_iter()
        .map(|(name, token)| view! { <meta name=name content=token.to_string() /> })
        .collect_view();

    view! {
        <meta name="description" content=meta.description.clone() />
        <meta name="keywords" content=meta.keywords.join(", ") />
        {authors}
        <meta name="creator" content=meta.creator.clone() />
        <meta name="publisher" content=meta.publisher.clone() />
        <meta name="category" content=meta.category.clone() />
        {format_detection}
        <meta name="robots" content=meta.robots.content() />
        <meta name="googlebot" content=meta.robots.google_bot_content() />
        {verification}
        <link rel="canonical" href=config.absolute(&meta.canonical) />
    }
}

fn open_graph_tags(config: &ShellConfig) -> impl IntoView {
    let og = &config.metadata.open_graph;

    let images = og
        .images
        .iter()
        .map(|image| {
            view! {
                {meta().attr("property", "og:image").content(config.absolute(&image.url))}
                {meta().attr("property", "og:image:width").content(image.width.to_string())}
                {meta().attr("property", "og:image:height").content(image.height.to_string())}
                {meta().attr("property", "og:image:alt").content(image.alt.clone())}
            }
        })
        .collect_view();

    view! {
        {meta().attr("property", "og:type").content(og.kind.clone())}
        {meta().attr("property", "og:locale").content(og.locale.clone())}
        {meta().attr("property", "og:url").content(og.url.clone())}
        {meta().attr("property", "og:site_name").content(og.site_name.clone())}
        {meta().attr("property", "og:title").content(og.title.clone())}
        {meta().attr("property", "og:description").content(og.description.clone())}
        {images}
    }
}

fn twitter_tags(config: &ShellConfig) -> impl IntoView {
    let twitter = &config.metadata.twitter;

    let images = twitter
        .images
        .iter()
        .map(|image| view! { <meta name="twitter:image" content=config.absolute(image) /> })
        .collect_view();

    view! {
        <meta name="twitter:card" content=twitter.card.clone() />
        <meta name="twitter:title" content=twitter.title.clone() />
        <meta name="twitter:description" content=twitter.description.clone() />
        <meta name="twitter:creator" content=twitter.creator.clone() />
        {images}
    }
}

fn viewport_tags(config: &ShellConfig) -> impl IntoView {
    let viewport = &config.viewport;

    let theme_colors = viewport
        .theme_colors
        .iter()
        .map(|color| {
            view! {
                {meta().name("theme-color").attr("media", color.media.clone()).content(color.color.clone())}
            }
        })
        .collect_view();

    view! {
        <meta name="viewport" content=viewport.content() />
        {theme_colors}
        <meta name="color-scheme" content=viewport.color_scheme.clone() />
    }
}

fn hint_tags(config: &ShellConfig) -> impl IntoView {
    let hints = &config.hints;

    let preconnects = hints
        .preconnects
        .iter()
        .map(|hint| {
            view! {
                <link rel="preconnect" href=hint.href.clone() crossorigin=hint.crossorigin.clone() />
            }
        })
        .collect_view();
    let icons = hints
        .icons
        .iter()
        .map(|icon| {
            view! {
                <link
                    rel=icon.rel.clone()
                    href=icon.href.clone()
                    sizes=icon.sizes.clone()
                    type=icon.mime.clone()
                />
            }
        })
        .collect_view();
    let pwa = hints
        .pwa
        .iter()
        .map(|tag| view! { <meta name=tag.name.clone() content=tag.content.clone() /> })
        .collect_view();
    let preloads = hints
        .preloads
        .iter()
        .map(|preload| {
            view! {
                <link
                    rel="preload"
                    href={preload.href.clone()}
                    as=preload.as_kind.clone()
                    type=preload.mime.clone()
                />
            }
        })
        .collect_view();

    view! {
        {preconnects}
        {icons}
        <link rel="manifest" href=hints.manifest.clone() />
        {pwa}
        {preloads}
    }
}

fn font_tags(config: &ShellConfig) -> impl IntoView {
    let fonts = &config.fonts;

    let preloads = fonts
        .preloaded()
        .map(|font| view! { <link rel="preload" href={font.stylesheet_url()} as="style" /> })
        .collect_view();
    let stylesheets = fonts
        .all()
        .into_iter()
        .map(|font| view! { <link rel="stylesheet" href=font.stylesheet_url() /> })
        .collect_view();

    view! {
        {preloads}
        {stylesheets}
        <style id="font-variables" inner_html=fonts.css_variables()></style>
    }
}
