//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome shared between auth pages while all field
//! state flows through the bindings handed in by the page.

pub mod logo_header;
pub mod text_field;
