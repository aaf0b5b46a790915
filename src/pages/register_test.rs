use super::{RegisterErrors, validate_register};

fn valid() -> Result<crate::net::types::RegisterRequest, RegisterErrors> {
    validate_register(
        "Jane",
        "Doe",
        "jane@example.com",
        "555-0100",
        "secret123",
        "secret123",
    )
}

#[test]
fn complete_input_builds_a_request() {
    let request = valid().unwrap();
    assert_eq!(request.first_name, "Jane");
    assert_eq!(request.last_name, "Doe");
    assert_eq!(request.email, "jane@example.com");
    assert_eq!(request.password, "secret123");
    assert_eq!(request.phone.as_deref(), Some("555-0100"));
}

#[test]
fn blank_phone_is_dropped() {
    let request =
        validate_register("Jane", "Doe", "jane@example.com", "   ", "secret123", "secret123")
            .unwrap();
    assert_eq!(request.phone, None);
}

#[test]
fn names_are_required() {
    let errors =
        validate_register("  ", "", "jane@example.com", "", "secret123", "secret123").unwrap_err();
    assert_eq!(errors.first_name, Some("First name is required"));
    assert_eq!(errors.last_name, Some("Last name is required"));
}

#[test]
fn email_is_validated() {
    let errors = validate_register("Jane", "Doe", "", "", "secret123", "secret123").unwrap_err();
    assert_eq!(errors.email, Some("Email is required"));

    let errors =
        validate_register("Jane", "Doe", "jane.example.com", "", "secret123", "secret123")
            .unwrap_err();
    assert_eq!(errors.email, Some("Email is invalid"));
}

#[test]
fn short_password_is_rejected() {
    let errors =
        validate_register("Jane", "Doe", "jane@example.com", "", "short", "short").unwrap_err();
    assert_eq!(errors.password, Some("Password must be at least 6 characters"));
}

#[test]
fn six_character_password_is_accepted() {
    let request =
        validate_register("Jane", "Doe", "jane@example.com", "", "sixpw!", "sixpw!").unwrap();
    assert_eq!(request.password, "sixpw!");
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let errors =
        validate_register("Jane", "Doe", "jane@example.com", "", "secret123", "secret124")
            .unwrap_err();
    assert_eq!(errors.confirm_password, Some("Passwords do not match"));
}

#[test]
fn all_blank_reports_every_field() {
    let errors = validate_register("", "", "", "", "", "").unwrap_err();
    assert_eq!(errors.first_name, Some("First name is required"));
    assert_eq!(errors.last_name, Some("Last name is required"));
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.password, Some("Password is required"));
    // An empty confirmation matches an empty password.
    assert_eq!(errors.confirm_password, None);
    assert!(!errors.is_empty());
}
