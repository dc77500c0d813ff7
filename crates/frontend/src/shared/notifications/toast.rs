use leptos::prelude::*;

use super::{Notifications, Toast};

/// Stack of visible toasts, newest at the bottom.
#[component]
pub fn NotificationToast(notifications: Notifications) -> impl IntoView {
    view! {
        <div class="toast-stack" role="status">
            <For
                each=move || notifications.visible()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.css_modifier())>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss notification"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
