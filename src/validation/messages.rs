//! Collapse `validator` error sets into one display message per field.
//!
//! ERROR HANDLING
//! ==============
//! The forms surface at most one message under each input. Rules declared
//! without a custom message fall back to a generic per-field message rather
//! than leaking the library's error codes into the UI.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use std::collections::BTreeMap;

use validator::ValidationErrors;

/// Extract the first failing rule's message for each invalid field.
///
/// Keys are field names as declared on the schema struct. Rules without a
/// `message` annotation map to `"<field> is invalid"`.
pub fn first_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for (field, field_errors) in errors.field_errors() {
        let Some(first) = field_errors.first() else {
            continue;
        };
        let message = first
            .message
            .as_ref()
            .map_or_else(|| format!("{field} is invalid"), ToString::to_string);
        out.insert(field.to_string(), message);
    }
    out
}
