//! Labeled text input bound to one schema field.

use leptos::prelude::*;
use validator::Validate;

use crate::form::binder::FieldBinding;

/// A labeled input wired to a field binding, with an optional description
/// line and the field's visible validation error underneath.
#[component]
pub fn TextField<T>(
    binding: FieldBinding<T>,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, strip_option)] description: Option<&'static str>,
) -> impl IntoView
where
    T: Validate + Clone + Send + Sync + 'static,
{
    view! {
        <div class="form-field">
            <label class="form-field__label" for=binding.name()>
                {label}
            </label>
            <input
                class="form-field__input"
                id=binding.name()
                name=binding.name()
                type=input_type
                placeholder=placeholder
                prop:value=move || binding.value()
                on:input=move |ev| binding.set(event_target_value(&ev))
                on:blur=move |_| binding.mark_touched()
            />
            {description.map(|text| view! { <p class="form-field__description">{text}</p> })}
            <Show when=move || binding.error().is_some()>
                <p class="form-field__error">{move || binding.error().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
