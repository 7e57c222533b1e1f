//! Pure form state: values, per-field errors, touched tracking.
//!
//! DESIGN
//! ======
//! The model re-validates the whole values struct on every change and on
//! submit, but a field's error only becomes *visible* once that field has
//! been touched or a submit has been attempted. Keeping this logic free of
//! browser and signal types lets the interesting transitions run under plain
//! `cargo test`.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::{BTreeMap, BTreeSet};

use validator::Validate;

use crate::validation::messages::first_messages;

/// Writes one field's new text value into the values struct.
pub type FieldSetter<T> = fn(&mut T, String);

/// Reads one field's current text out of the values struct.
pub type FieldGetter<T> = fn(&T) -> &str;

/// In-memory state for one mounted form.
#[derive(Clone, Debug)]
pub struct FormModel<T: Validate + Clone> {
    values: T,
    errors: BTreeMap<String, String>,
    touched: BTreeSet<&'static str>,
    submitted: bool,
}

impl<T: Validate + Clone> FormModel<T> {
    /// Start from the given defaults with no errors recorded and no fields
    /// touched. Defaults are not validated until the first change or submit.
    pub fn new(defaults: T) -> Self {
        Self {
            values: defaults,
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
            submitted: false,
        }
    }

    /// Current form values.
    pub fn values(&self) -> &T {
        &self.values
    }

    /// Apply a field edit and re-validate the whole struct.
    pub fn set_field(&mut self, value: String, set: FieldSetter<T>) {
        set(&mut self.values, value);
        self.revalidate();
    }

    /// Record that the user has focused and left the field, which makes its
    /// error (if any) visible.
    pub fn mark_touched(&mut self, name: &'static str) {
        self.touched.insert(name);
        self.revalidate();
    }

    /// The field's current error regardless of visibility gating.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// The error to display under the field, or `None` while the field is
    /// untouched and no submit has been attempted.
    pub fn visible_error(&self, name: &str) -> Option<&str> {
        if self.submitted || self.touched.contains(name) {
            self.error(name)
        } else {
            None
        }
    }

    /// Run the schema check and hand back the values when every field passes.
    ///
    /// A failed attempt records the field errors and makes all of them
    /// visible; the caller-supplied success path never runs.
    pub fn try_submit(&mut self) -> Option<T> {
        self.submitted = true;
        self.revalidate();
        if self.errors.is_empty() {
            Some(self.values.clone())
        } else {
            None
        }
    }

    fn revalidate(&mut self) {
        self.errors = match self.values.validate() {
            Ok(()) => BTreeMap::new(),
            Err(errors) => first_messages(&errors),
        };
    }
}
