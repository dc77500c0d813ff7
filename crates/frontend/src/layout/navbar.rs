use leptos::prelude::*;

use crate::app::ShellCapabilities;
use crate::shared::theme::ThemeToggle;

const LINKS: [(&str, &str); 3] = [("/", "Home"), ("/discover", "Discover"), ("/watchlist", "Watchlist")];

/// Route of the hosted sign-in page.
const SIGN_IN_PATH: &str = "/sign-in";

#[component]
pub fn Navbar(caps: ShellCapabilities) -> impl IntoView {
    let identity = caps.identity;
    let current_path = window().location().pathname().unwrap_or_default();

    let sign_out = move |_| {
        identity.sign_out();
        caps.notifications.info("You have been signed out");
    };

    view! {
        <nav class="navbar" aria-label="Main">
            <a class="navbar__brand font-display" href="/">"Cinetron"</a>
            <ul class="navbar__links">
                {LINKS
                    .iter()
                    .map(|(href, title)| {
                        let active = current_path == *href;
                        view! {
                            <li>
                                <a
                                    href=*href
                                    class=if active { "navbar__link navbar__link--active" } else { "navbar__link" }
                                    aria-current=if active { Some("page") } else { None }
                                >
                                    {*title}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="navbar__actions">
                <ThemeToggle theme=caps.theme />
                <button
                    class="navbar__icon-btn"
                    title="Settings"
                    aria-label="Open settings"
                    on:click=move |_| caps.modal.show()
                >
                    "⚙"
                </button>
                <Show
                    when=move || identity.is_authenticated()
                    fallback=|| view! { <a class="button button--primary" href=SIGN_IN_PATH>"Sign in"</a> }
                >
                    {move || {
                        identity
                            .user()
                            .map(|user| {
                                view! {
                                    <span class="navbar__user" title=user.display_name().to_string()>
                                        <span class="navbar__avatar">{user.initials()}</span>
                                        <span class="navbar__name">{user.display_name().to_string()}</span>
                                    </span>
                                }
                            })
                    }}
                    <button class="button button--ghost" on:click=sign_out>"Sign out"</button>
                </Show>
            </div>
        </nav>
    }
}
