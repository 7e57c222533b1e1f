use super::*;

use validator::Validate;

#[derive(Validate)]
struct Probe {
    #[validate(length(min = 3, message = "too short"))]
    tag: String,
    #[validate(email)]
    contact: String,
}

#[test]
fn first_messages_uses_declared_message() {
    let probe = Probe {
        tag: "ab".to_owned(),
        contact: "probe@example.com".to_owned(),
    };
    let Err(errors) = probe.validate() else {
        unreachable!("tag is below the minimum length");
    };
    let messages = first_messages(&errors);
    assert_eq!(messages.get("tag").map(String::as_str), Some("too short"));
    assert!(!messages.contains_key("contact"));
}

#[test]
fn first_messages_falls_back_for_message_less_rules() {
    let probe = Probe {
        tag: "abc".to_owned(),
        contact: "not-an-email".to_owned(),
    };
    let Err(errors) = probe.validate() else {
        unreachable!("contact is not a valid email");
    };
    let messages = first_messages(&errors);
    assert_eq!(
        messages.get("contact").map(String::as_str),
        Some("contact is invalid")
    );
}

#[test]
fn first_messages_reports_every_invalid_field() {
    let probe = Probe {
        tag: String::new(),
        contact: String::new(),
    };
    let Err(errors) = probe.validate() else {
        unreachable!("both fields are invalid");
    };
    let messages = first_messages(&errors);
    assert_eq!(messages.len(), 2);
}
