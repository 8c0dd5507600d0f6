use std::error::Error;

use http_errors::{
    Arg, ArgumentError, ErrorConstructor, ErrorKind, FactoryError, HttpError, PlainError, Props, create_error,
    is_http_error,
};
use serde_json::json;

#[test]
fn creates_an_error_value() {
    let err = create_error!(500).unwrap();
    let as_error: &dyn Error = &err;
    assert_eq!(as_error.to_string(), "Internal Server Error");
}

#[test]
fn not_found() {
    let err = create_error!(404).unwrap();
    assert_eq!(err.message(), "Not Found");
    assert_eq!(err.name(), "NotFoundError");
    assert_eq!(err.status(), 404);
    assert_eq!(err.status_code(), 404);
}

#[test]
fn unknown_4xx() {
    let err = create_error!(499).unwrap();
    assert_eq!(err.message(), "Bad Request");
    assert_eq!(err.name(), "BadRequestError");
    assert_eq!(err.status(), 499);
    assert_eq!(err.status_code(), 499);
}

#[test]
fn unknown_5xx() {
    let err = create_error!(599).unwrap();
    assert_eq!(err.message(), "Internal Server Error");
    assert_eq!(err.name(), "InternalServerError");
    assert_eq!(err.status(), 599);
    assert_eq!(err.status_code(), 599);
}

#[test]
fn every_client_status_is_exposed() {
    for status in 400..500 {
        let err = create_error!(status).unwrap();
        assert_eq!(i64::from(err.status()), status);
        assert_eq!(err.status_code(), err.status());
        assert!(err.expose(), "status {status}");
    }
}

#[test]
fn every_server_status_is_hidden() {
    for status in 500..600 {
        let err = create_error!(status).unwrap();
        assert_eq!(i64::from(err.status()), status);
        assert!(!err.expose(), "status {status}");
    }
}

#[test]
fn out_of_range_statuses_become_500() {
    for status in [-1, 0, 100, 200, 302, 600, 999] {
        let err = create_error!(status).unwrap();
        assert_eq!(err.status(), 500, "status {status}");
        assert_eq!(err.name(), "InternalServerError");
    }
}

#[test]
fn message_overrides_phrase() {
    let err = create_error!(404, "missing").unwrap();
    assert_eq!(err.message(), "missing");
    assert_eq!(err.to_string(), "missing");
    assert_eq!(err.status(), 404);
    assert_eq!(err.status_code(), 404);
}

#[test]
fn status_and_props() {
    let err = create_error!(404, Props::new().with("id", 1)).unwrap();
    assert_eq!(err.name(), "NotFoundError");
    assert_eq!(err.message(), "Not Found");
    assert_eq!(err.status(), 404);
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.prop("id"), Some(&json!(1)));
}

#[test]
fn status_and_props_with_status_prop() {
    let err = create_error!(404, json!({"id": 1, "status": 500})).unwrap();
    assert_eq!(err.name(), "NotFoundError");
    assert_eq!(err.message(), "Not Found");
    assert_eq!(err.status(), 404);
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.prop("id"), Some(&json!(1)));
    assert!(err.prop("status").is_none());
}

#[test]
fn status_and_props_with_status_code_prop() {
    let err = create_error!(404, json!({"id": 1, "statusCode": 500})).unwrap();
    assert_eq!(err.status(), 404);
    assert_eq!(err.status_code(), 404);
    assert!(err.prop("statusCode").is_none());
}

#[test]
fn props_only() {
    let err = create_error!(json!({"id": 1})).unwrap();
    assert_eq!(err.name(), "InternalServerError");
    assert_eq!(err.message(), "Internal Server Error");
    assert_eq!(err.status(), 500);
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.prop("id"), Some(&json!(1)));
}

#[test]
fn message_only() {
    let err = create_error!("LOL").unwrap();
    assert_eq!(err.name(), "InternalServerError");
    assert_eq!(err.message(), "LOL");
    assert_eq!(err.status(), 500);
    assert_eq!(err.status_code(), 500);
}

#[test]
fn message_and_props() {
    let err = create_error!("LOL", json!({"id": 1})).unwrap();
    assert_eq!(err.name(), "InternalServerError");
    assert_eq!(err.message(), "LOL");
    assert_eq!(err.status(), 500);
    assert_eq!(err.prop("id"), Some(&json!(1)));
}

#[test]
fn existing_error_with_status() {
    let source = std::io::Error::other("LOL");
    let plain = PlainError::wrap(source).with_status(404);
    let before: *const dyn Error = plain.source().unwrap();

    let err = create_error!(plain).unwrap();
    let after: *const dyn Error = err.source().unwrap();
    assert!(std::ptr::addr_eq(before, after));
    assert_eq!(err.name(), "Error");
    assert_eq!(err.message(), "LOL");
    assert_eq!(err.status(), 404);
    assert_eq!(err.status_code(), 404);
    assert!(err.expose());
}

#[test]
fn existing_error_without_status() {
    let err = create_error!(PlainError::new("LOL")).unwrap();
    assert_eq!(err.name(), "Error");
    assert_eq!(err.message(), "LOL");
    assert_eq!(err.status(), 500);
    assert_eq!(err.status_code(), 500);
    assert!(!err.expose());
}

#[test]
fn null_argument() {
    let err = create_error!(serde_json::Value::Null).unwrap();
    assert_eq!(err.name(), "InternalServerError");
    assert_eq!(err.message(), "Internal Server Error");
    assert_eq!(err.status(), 500);
    assert!(!err.expose());
}

#[test]
fn existing_error_with_invalid_status() {
    let err = create_error!(PlainError::new("Connection refused").with_status(-1)).unwrap();
    assert_eq!(err.name(), "Error");
    assert_eq!(err.message(), "Connection refused");
    assert_eq!(err.status(), 500);
    assert_eq!(err.status_code(), 500);
    assert!(!err.expose());
}

#[test]
fn existing_error_and_props() {
    let plain = PlainError::new("LOL").with_status(404);
    let err = create_error!(plain, json!({"id": 1})).unwrap();
    assert_eq!(err.name(), "Error");
    assert_eq!(err.message(), "LOL");
    assert_eq!(err.status(), 404);
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.prop("id"), Some(&json!(1)));
    assert!(err.expose());
}

#[test]
fn status_existing_error_and_props() {
    let plain = PlainError::new("LOL").with_status(500);
    let err = create_error!(404, plain, json!({"id": 1})).unwrap();
    assert_eq!(err.name(), "Error");
    assert_eq!(err.message(), "LOL");
    assert_eq!(err.status(), 404);
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.prop("id"), Some(&json!(1)));
}

#[test]
fn existing_http_error_is_returned() {
    let original = HttpError::new(ErrorKind::Conflict).with_prop("marker", "original");
    let err = create_error!(404, original, json!({"id": 1})).unwrap();
    assert_eq!(err.kind(), Some(ErrorKind::Conflict));
    assert_eq!(err.name(), "ConflictError");
    assert_eq!(err.message(), "Conflict");
    assert_eq!(err.status(), 404);
    assert_eq!(err.prop("marker"), Some(&json!("original")));
    assert_eq!(err.prop("id"), Some(&json!(1)));
}

#[test]
fn status_message_and_props() {
    let err = create_error!(404, "LOL", json!({"id": 1})).unwrap();
    assert_eq!(err.name(), "NotFoundError");
    assert_eq!(err.message(), "LOL");
    assert_eq!(err.status(), 404);
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.prop("id"), Some(&json!(1)));
}

#[test]
fn props_can_hide_a_client_error() {
    let err = create_error!(404, "LOL", json!({"expose": false})).unwrap();
    assert!(!err.expose());
    assert!(err.props().is_empty());
}

#[test]
fn abstract_base_refuses_construction() {
    let err = ErrorConstructor::HttpError.construct([]).unwrap_err();
    assert!(matches!(err, FactoryError::AbstractConstruction));
    assert!(err.to_string().contains("cannot construct abstract class"));
}

#[test]
fn produced_values_are_http_errors() {
    for status in [404, 500] {
        let err = create_error!(status).unwrap();
        assert!(is_http_error(&err));
        assert!(ErrorConstructor::HttpError.is_instance(&err));

        let boxed: Box<dyn Error + Send + Sync> = Box::new(err);
        assert!(boxed.downcast_ref::<HttpError>().is_some());
    }
}

#[test]
fn adopted_errors_are_http_errors_too() {
    let err = create_error!(PlainError::new("LOL")).unwrap();
    assert!(is_http_error(&err));
    assert!(ErrorConstructor::HttpError.is_instance(&err));
    assert!(!ErrorConstructor::Kind(ErrorKind::InternalServerError).is_instance(&err));
}

#[test]
fn unsupported_argument_types() {
    let err = create_error!(404, json!(true)).unwrap_err();
    assert!(matches!(
        err,
        FactoryError::Argument(ArgumentError::UnsupportedType {
            position: 1,
            found: "boolean",
        })
    ));

    let err = http_errors::create_error([Arg::from(json!(404.5))]).unwrap_err();
    assert!(matches!(
        err,
        FactoryError::Argument(ArgumentError::NonIntegerStatus { position: 0, .. })
    ));
}

#[test]
fn mistyped_reserved_property() {
    let err = create_error!(json!({"message": 42})).unwrap_err();
    assert_eq!(err.to_string(), "argument 0: property `message` must be a string");
}

#[test]
fn message_overrides_existing_error_message() {
    let err = create_error!("explicit", PlainError::new("LOL")).unwrap();
    assert_eq!(err.name(), "Error");
    assert_eq!(err.message(), "explicit");
    assert_eq!(err.status(), 500);
}

#[test]
fn message_overrides_existing_error_message_property() {
    let plain = PlainError::new("LOL").with_prop("message", "inner");
    let err = create_error!(404, "explicit", plain).unwrap();
    assert_eq!(err.message(), "explicit");
    assert_eq!(err.status(), 404);
    assert!(err.props().is_empty());
}

#[test]
fn existing_error_status_property() {
    let err = create_error!(PlainError::new("LOL").with_prop("status", 404)).unwrap();
    assert_eq!(err.status(), 404);
    assert!(err.expose());
    assert!(err.prop("status").is_none());
}

#[test]
fn existing_error_expose_is_set_once() {
    let plain = PlainError::new("LOL").with_status(404).with_expose(false).with_prop("expose", true);
    let err = create_error!(plain).unwrap();
    assert!(err.expose());
    assert!(err.props().is_empty());
}
