use super::*;

#[test]
fn submit_log_line_serializes_both_fields() {
    let values = SignInValues {
        email: "jane@example.com".to_owned(),
        password: "password123".to_owned(),
    };
    assert_eq!(
        submit_log_line(&values),
        r#"{"email":"jane@example.com","password":"password123"}"#
    );
}
