//! Document body: provider wrappers, chrome mount points and the content slot.

use contracts::shell::mounts;
use leptos::prelude::*;

use super::markup::Markup;

pub fn shell_body(content: Markup, client_entry: Option<String>) -> impl IntoView {
    let loader = client_entry.map(|entry| {
        let source = format!("import init from '{entry}'; init();");
        view! { <script type="module" inner_html=source></script> }
    });

    view! {
        <body class="shell-body" data-suppress-hydration-warning=true>
            // Client-side providers attach to these wrappers, outer to inner.
            <div data-provider="auth-sync">
                <div data-provider="app-providers">
                    <div id="shell" class="shell-frame">
                        <div class="shell-background" aria-hidden="true"></div>
                        <div data-mount=mounts::NAVBAR></div>
                        <div data-mount=mounts::SETTINGS_MODAL></div>
                        <div data-mount=mounts::NOTIFICATIONS aria-live="polite"></div>
                        {content.into_main()}
                        <div data-mount=mounts::PERFORMANCE_MONITOR hidden=true></div>
                    </div>
                </div>
            </div>
            {loader}
        </body>
    }
}
