use super::*;

#[test]
fn validate_contact_input_normalizes_fields() {
    let input = validate_contact_input(
        " Ali ",
        " ali@example.com ",
        " 0300-1234567 ",
        "Plumbing",
        "  Kitchen tap is leaking.  ",
    )
    .expect("valid input");

    assert_eq!(input.name, "Ali");
    assert_eq!(input.email, "ali@example.com");
    assert_eq!(input.message, "Kitchen tap is leaking.");
    assert_eq!(input.category, "Plumbing");
}

#[test]
fn validate_contact_input_requires_name_email_message() {
    assert_eq!(
        validate_contact_input("", "a@b.com", "", "General Enquiry", "hi"),
        Err("Enter your name.")
    );
    assert_eq!(
        validate_contact_input("Ali", "not-an-email", "", "General Enquiry", "hi"),
        Err("Enter a valid email address.")
    );
    assert_eq!(
        validate_contact_input("Ali", "a@b.com", "", "General Enquiry", "   "),
        Err("Tell us what you need.")
    );
}
