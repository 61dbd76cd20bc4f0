use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret"),
        Ok(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_rejects_blank_email() {
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_login_input_rejects_email_without_at() {
    assert_eq!(
        validate_login_input("not-an-email", "secret"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("user@example.com", ""),
        Err("Enter your password.")
    );
}
