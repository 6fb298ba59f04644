//! Checkbox bound to one field of the settings shadow copy

use leptos::prelude::*;
use crate::settings::SettingsMachine;
use crate::types::SettingsField;

#[component]
pub fn SettingsToggle(
    machine: RwSignal<SettingsMachine>,
    field: SettingsField,
    id: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="mb-4 flex items-center justify-between">
            <label for=id class="text-lg">{label}</label>
            <input
                type="checkbox"
                id=id
                name=id
                class="form-checkbox h-5 w-5 text-blue-600"
                prop:checked=move || machine.with(|m| m.record().get(field))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    machine.update(|m| m.set_field(field, checked));
                }
            />
        </div>
    }
}
