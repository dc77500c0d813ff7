use leptos::prelude::*;

/// Сервис для централизованного управления модальным окном настроек
#[derive(Clone, Copy)]
pub struct ModalService {
    is_visible: RwSignal<bool>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            is_visible: RwSignal::new(false),
        }
    }

    /// Показать модальное окно
    pub fn show(&self) {
        self.is_visible.set(true);
    }

    /// Скрыть модальное окно
    pub fn hide(&self) {
        self.is_visible.set(false);
    }

    /// Проверить, открыто ли модальное окно
    pub fn is_open(&self) -> bool {
        self.is_visible.get()
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlay + dialog; clicking the overlay closes it.
#[component]
pub fn Modal(service: ModalService, title: &'static str, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show when=move || service.is_open()>
            <div class="modal-overlay" on:click=move |_| service.hide()>
                <div
                    class="modal-content"
                    role="dialog"
                    aria-modal="true"
                    aria-label=title
                    on:click=|e| e.stop_propagation()
                >
                    <header class="modal-header">
                        <h2 class="modal-title font-display">{title}</h2>
                        <button
                            class="modal-close"
                            aria-label="Close"
                            on:click=move |_| service.hide()
                        >
                            "×"
                        </button>
                    </header>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
