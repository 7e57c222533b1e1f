//! Form state binding between inputs and schema validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `model` is a pure state machine over any `Validate` schema so the
//! change/touch/submit rules stay testable on the host; `binder` wraps it in
//! a signal and hands pages per-field bind handles plus a submit wrapper.

pub mod binder;
pub mod model;
