//! Schema for the account creation form.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use serde::Serialize;
use validator::Validate;

/// Values collected by the sign-up form.
///
/// Starts out with empty defaults when the page mounts and is discarded on
/// navigation away; nothing is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Validate)]
pub struct SignUpValues {
    #[validate(length(min = 2, max = 50, message = "Username must be between 2 and 50 characters"))]
    pub username: String,

    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, max = 100, message = "Password must be between 8 and 100 characters"))]
    pub password: String,
}
