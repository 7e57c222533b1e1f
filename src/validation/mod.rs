//! Declarative form schemas and validation message mapping.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rule evaluation is delegated to the `validator` crate; these modules only
//! declare the acceptable field shapes and collapse the library's error sets
//! into one display message per field for the form binder.

pub mod messages;
pub mod sign_in;
pub mod sign_up;
