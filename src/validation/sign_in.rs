//! Schema for the sign-in form.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use serde::Serialize;
use validator::Validate;

/// Values collected by the sign-in form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Validate)]
pub struct SignInValues {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}
