use super::*;

use crate::validation::messages::first_messages;

fn valid_values() -> SignUpValues {
    SignUpValues {
        username: "shadcn".to_owned(),
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        password: "password123".to_owned(),
    }
}

fn message_for(values: &SignUpValues, field: &str) -> Option<String> {
    match values.validate() {
        Ok(()) => None,
        Err(errors) => first_messages(&errors).get(field).cloned(),
    }
}

#[test]
fn valid_values_pass() {
    assert!(valid_values().validate().is_ok());
}

#[test]
fn name_below_minimum_is_rejected() {
    let values = SignUpValues {
        name: "J".to_owned(),
        ..valid_values()
    };
    assert_eq!(
        message_for(&values, "name"),
        Some("Name must be between 2 and 100 characters".to_owned())
    );
}

#[test]
fn name_above_maximum_is_rejected() {
    let values = SignUpValues {
        name: "j".repeat(101),
        ..valid_values()
    };
    assert_eq!(
        message_for(&values, "name"),
        Some("Name must be between 2 and 100 characters".to_owned())
    );
}

#[test]
fn name_at_bounds_is_accepted() {
    for name in ["Jo".to_owned(), "j".repeat(100)] {
        let values = SignUpValues {
            name,
            ..valid_values()
        };
        assert!(values.validate().is_ok());
    }
}

#[test]
fn username_length_bounds_are_enforced() {
    for username in ["s".to_owned(), "s".repeat(51)] {
        let values = SignUpValues {
            username,
            ..valid_values()
        };
        assert_eq!(
            message_for(&values, "username"),
            Some("Username must be between 2 and 50 characters".to_owned())
        );
    }
}

#[test]
fn email_without_domain_is_rejected() {
    for email in ["jane", "jane@", "@example.com", "jane.example.com"] {
        let values = SignUpValues {
            email: email.to_owned(),
            ..valid_values()
        };
        assert_eq!(
            message_for(&values, "email"),
            Some("Invalid email address".to_owned()),
            "expected rejection for {email:?}"
        );
    }
}

#[test]
fn password_below_minimum_is_rejected() {
    let values = SignUpValues {
        password: "pass123".to_owned(),
        ..valid_values()
    };
    assert_eq!(
        message_for(&values, "password"),
        Some("Password must be between 8 and 100 characters".to_owned())
    );
}

#[test]
fn password_above_maximum_is_rejected() {
    let values = SignUpValues {
        password: "p".repeat(101),
        ..valid_values()
    };
    assert_eq!(
        message_for(&values, "password"),
        Some("Password must be between 8 and 100 characters".to_owned())
    );
}

#[test]
fn empty_defaults_fail_every_field() {
    let Err(errors) = SignUpValues::default().validate() else {
        unreachable!("empty defaults cannot satisfy the schema");
    };
    let messages = first_messages(&errors);
    for field in ["username", "name", "email", "password"] {
        assert!(messages.contains_key(field), "missing error for {field}");
    }
}
