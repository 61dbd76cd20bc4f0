use super::*;

#[test]
fn validate_signup_input_normalizes_fields() {
    let input = validate_signup_input(" Ali Raza ", " ali@example.com ", " 0300-1234567 ", "secret1")
        .expect("valid input");
    assert_eq!(input.full_name, "Ali Raza");
    assert_eq!(input.email, "ali@example.com");
    assert_eq!(input.phone, "0300-1234567");
}

#[test]
fn validate_signup_input_requires_name() {
    assert_eq!(
        validate_signup_input("  ", "a@b.com", "", "secret1"),
        Err("Enter your full name.")
    );
}

#[test]
fn validate_signup_input_requires_valid_email() {
    assert_eq!(
        validate_signup_input("Ali", "nope", "", "secret1"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_signup_input_enforces_password_minimum() {
    assert_eq!(
        validate_signup_input("Ali", "a@b.com", "", "12345"),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn validate_signup_input_allows_empty_phone() {
    let input = validate_signup_input("Ali", "a@b.com", "", "secret1").expect("valid input");
    assert_eq!(input.phone, "");
}
