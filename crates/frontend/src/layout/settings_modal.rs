use contracts::shell::settings::{UserSettings, REGIONS};
use contracts::shell::theme::ThemePreference;
use leptos::prelude::*;

use super::modal_service::Modal;
use crate::app::ShellCapabilities;
use crate::shared::notifications::ToastKind;

/// Toast shown after saving, depending on whether the settings were persisted.
fn save_feedback(persisted: bool) -> (ToastKind, &'static str) {
    if persisted {
        (ToastKind::Success, "Settings saved")
    } else {
        (ToastKind::Error, "Settings applied, but this browser would not store them")
    }
}

/// Settings dialog. Edits a draft; nothing is applied until "Save".
#[component]
pub fn SettingsModal(caps: ShellCapabilities) -> impl IntoView {
    let draft = RwSignal::new(UserSettings::default());

    // Fresh draft every time the dialog opens.
    Effect::new(move |_| {
        if caps.modal.is_open() {
            let mut current = caps.settings.get_untracked();
            current.theme = caps.theme.preference_untracked();
            draft.set(current);
        }
    });

    let save = move |_| {
        let settings = draft.get_untracked();
        caps.theme.set_preference(settings.theme);
        let (kind, message) = save_feedback(caps.settings.save(settings));
        caps.modal.hide();
        caps.notifications.notify(kind, message);
    };

    view! {
        <Modal service=caps.modal title="Settings">
            <form class="settings-form" on:submit=|ev| ev.prevent_default()>
                <fieldset class="settings-form__group">
                    <legend>"Theme"</legend>
                    {ThemePreference::all()
                        .into_iter()
                        .map(|pref| {
                            view! {
                                <label class="settings-form__choice">
                                    <input
                                        type="radio"
                                        name="theme"
                                        prop:checked=move || draft.with(|d| d.theme == pref)
                                        on:change=move |_| draft.update(|d| d.theme = pref)
                                    />
                                    {pref.display_name()}
                                </label>
                            }
                        })
                        .collect_view()}
                </fieldset>

                <label class="settings-form__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.reduce_motion)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            draft.update(|d| d.reduce_motion = checked);
                        }
                    />
                    "Reduce motion"
                </label>

                <label class="settings-form__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.autoplay_trailers)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            draft.update(|d| d.autoplay_trailers = checked);
                        }
                    />
                    "Autoplay trailers"
                </label>

                <label class="settings-form__field">
                    "Content region"
                    <select
                        on:change=move |ev| {
                            let region = event_target_value(&ev);
                            draft.update(|d| d.region = region);
                        }
                    >
                        {REGIONS
                            .iter()
                            .map(|&(code, name)| {
                                // Selection lives on the options: they do not exist yet when the select's own props are set.
                                view! {
                                    <option value=code prop:selected=move || draft.with(|d| d.is_region(code))>
                                        {name}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <div class="settings-form__actions">
                    <button type="button" class="button button--ghost" on:click=move |_| caps.modal.hide()>
                        "Cancel"
                    </button>
                    <button type="button" class="button button--primary" on:click=save>
                        "Save"
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpersisted_save_reports_error() {
        assert_eq!(save_feedback(true).0, ToastKind::Success);
        let (kind, message) = save_feedback(false);
        assert_eq!(kind, ToastKind::Error);
        assert!(message.contains("would not store"));
    }
}
