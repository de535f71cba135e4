use super::*;

#[test]
fn network_error_formats_cause() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
    assert_eq!(err.kind(), ApiErrorKind::Network);
}

#[test]
fn server_error_formats_status_and_message() {
    let err = ApiError::Server { status: 503, message: "maintenance window".to_owned() };
    assert_eq!(err.to_string(), "server error (503): maintenance window");
    assert_eq!(err.kind(), ApiErrorKind::Server);
}

#[test]
fn parse_error_formats_cause() {
    let err = ApiError::Parse("missing field `total`".to_owned());
    assert_eq!(err.to_string(), "unexpected response: missing field `total`");
    assert_eq!(err.kind(), ApiErrorKind::Parse);
}

#[test]
fn unauthenticated_has_fixed_message() {
    assert_eq!(ApiError::Unauthenticated.to_string(), "not signed in");
    assert_eq!(ApiError::Unauthenticated.kind(), ApiErrorKind::Unauthenticated);
}
