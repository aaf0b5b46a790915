use super::*;

#[test]
fn classify_401_is_unauthorized() {
    assert_eq!(classify_status(401, None), ApiError::Unauthorized);
}

#[test]
fn classify_403_is_forbidden() {
    assert_eq!(classify_status(403, None), ApiError::Forbidden);
}

#[test]
fn classify_404_is_not_found() {
    assert_eq!(classify_status(404, None), ApiError::NotFound);
}

#[test]
fn classify_4xx_with_message_is_validation() {
    assert_eq!(
        classify_status(400, Some("Email is already in use".to_owned())),
        ApiError::Validation("Email is already in use".to_owned())
    );
}

#[test]
fn classify_4xx_without_message_is_server() {
    assert_eq!(classify_status(422, None), ApiError::Server(422));
    assert_eq!(classify_status(400, Some(String::new())), ApiError::Server(400));
}

#[test]
fn classify_5xx_is_server() {
    assert_eq!(classify_status(500, None), ApiError::Server(500));
    assert_eq!(
        classify_status(503, Some("upstream down".to_owned())),
        ApiError::Server(503)
    );
}

#[test]
fn backend_message_only_for_nonempty_validation() {
    assert_eq!(
        ApiError::Validation("bad email".to_owned()).backend_message(),
        Some("bad email")
    );
    assert_eq!(ApiError::Validation(String::new()).backend_message(), None);
    assert_eq!(ApiError::Network.backend_message(), None);
}

#[test]
fn auth_failure_message_prefers_backend_message() {
    let err = ApiError::Validation("Invalid credentials".to_owned());
    assert_eq!(
        auth_failure_message(&err, "Login failed. Please try again."),
        "Invalid credentials"
    );
}

#[test]
fn auth_failure_message_falls_back_for_transport_errors() {
    assert_eq!(
        auth_failure_message(&ApiError::Timeout, "Login failed. Please try again."),
        "Login failed. Please try again."
    );
}
