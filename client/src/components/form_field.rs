//! Labelled inputs bound to string signals.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;

#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn SelectField(label: &'static str, value: RwSignal<String>, options: &'static [&'static str]) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <select
                class="form-field__input"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .iter()
                    .map(|&option| {
                        view! {
                            <option value=option selected=move || value.with(|v| v == option)>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Submit button that disables and relabels itself while `busy`.
#[component]
pub fn SubmitButton(
    #[prop(into)] busy: Signal<bool>,
    idle_label: &'static str,
    busy_label: &'static str,
    on_press: Callback<()>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            class="btn btn--primary"
            disabled=move || busy.get() || disabled.get()
            on:click=move |_| on_press.run(())
        >
            {move || submit_label(busy.get(), idle_label, busy_label)}
        </button>
    }
}

pub fn submit_label(busy: bool, idle_label: &'static str, busy_label: &'static str) -> &'static str {
    if busy { busy_label } else { idle_label }
}
