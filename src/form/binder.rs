//! Reactive layer handing pages per-field bind handles.
//!
//! DESIGN
//! ======
//! `FormHandle` owns the `FormModel` behind one `RwSignal`, so any field edit
//! re-renders every view reading a value or an error from the same form.
//! Field access goes through `fn`-pointer lenses, which keeps the handle
//! `Copy` and lets `view!` closures capture bindings by value.

use leptos::prelude::*;
use validator::Validate;

use super::model::{FieldGetter, FieldSetter, FormModel};

/// Handle to one mounted form's state.
pub struct FormHandle<T>
where
    T: Validate + Clone + Send + Sync + 'static,
{
    model: RwSignal<FormModel<T>>,
}

impl<T> FormHandle<T>
where
    T: Validate + Clone + Send + Sync + 'static,
{
    /// Create form state seeded with the given default values.
    pub fn new(defaults: T) -> Self {
        Self {
            model: RwSignal::new(FormModel::new(defaults)),
        }
    }

    /// Bind one named field through a getter/setter lens pair.
    ///
    /// The name must match the schema struct's field identifier, since that
    /// is the key `validator` reports errors under.
    pub fn field(self, name: &'static str, get: FieldGetter<T>, set: FieldSetter<T>) -> FieldBinding<T> {
        FieldBinding {
            form: self,
            name,
            get,
            set,
        }
    }

    /// Wrap a success callback into an `on:submit` handler.
    ///
    /// The handler suppresses the browser's native submission, runs the
    /// schema check, and only invokes `on_valid` with the validated values
    /// when every field passes.
    pub fn on_submit<F>(self, on_valid: F) -> impl Fn(leptos::ev::SubmitEvent) + 'static
    where
        F: Fn(T) + 'static,
    {
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let submitted = self.model.try_update(FormModel::try_submit).flatten();
            if let Some(values) = submitted {
                on_valid(values);
            }
        }
    }
}

impl<T> Clone for FormHandle<T>
where
    T: Validate + Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FormHandle<T> where T: Validate + Clone + Send + Sync + 'static {}

/// Per-field handle: current value, visible error, and the input setter.
pub struct FieldBinding<T>
where
    T: Validate + Clone + Send + Sync + 'static,
{
    form: FormHandle<T>,
    name: &'static str,
    get: FieldGetter<T>,
    set: FieldSetter<T>,
}

impl<T> FieldBinding<T>
where
    T: Validate + Clone + Send + Sync + 'static,
{
    /// Schema field identifier; doubles as the input element id.
    pub fn name(self) -> &'static str {
        self.name
    }

    /// Current text for the bound field. Reactive when read inside a view.
    pub fn value(self) -> String {
        self.form.model.with(|m| (self.get)(m.values()).to_owned())
    }

    /// The error message to show under the field, if any is visible.
    pub fn error(self) -> Option<String> {
        self.form
            .model
            .with(|m| m.visible_error(self.name).map(ToOwned::to_owned))
    }

    /// Apply a new value from an input event and re-validate.
    pub fn set(self, value: String) {
        self.form.model.update(|m| m.set_field(value, self.set));
    }

    /// Mark the field touched (blur), revealing its error if one exists.
    pub fn mark_touched(self) {
        self.form.model.update(|m| m.mark_touched(self.name));
    }
}

impl<T> Clone for FieldBinding<T>
where
    T: Validate + Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldBinding<T> where T: Validate + Clone + Send + Sync + 'static {}
