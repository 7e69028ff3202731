use super::*;

#[test]
fn validate_register_input_trims_identity_fields() {
    let request = validate_register_input(" ada@example.com ", "pw", " Ada ", " Lovelace ").unwrap();
    assert_eq!(
        request,
        RegisterRequest {
            email: "ada@example.com".to_owned(),
            password: "pw".to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
        }
    );
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(validate_register_input("a@b.com", "pw", "Ada", "  "), Err("Fill in every field."));
    assert_eq!(validate_register_input("a@b.com", "", "Ada", "Lovelace"), Err("Fill in every field."));
    assert_eq!(validate_register_input("", "pw", "Ada", "Lovelace"), Err("Fill in every field."));
}

#[test]
fn validate_register_input_rejects_email_without_at_sign() {
    assert_eq!(
        validate_register_input("ada.example.com", "pw", "Ada", "Lovelace"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn register_error_message_surfaces_server_validation_text() {
    let message = register_error_message(&RegisterError::Validation("Email is already taken".to_owned()));
    assert_eq!(message, "Email is already taken");
}

#[test]
fn register_error_message_reports_unreachable_service() {
    assert_eq!(register_error_message(&RegisterError::Network("offline".to_owned())), UNREACHABLE_MESSAGE);
}
