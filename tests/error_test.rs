use std::io;

use stencil::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ValidationError { field: "project_name".to_string() };
    assert_eq!(
        err.to_string(),
        "Validation error: missing or empty required field: project_name."
    );

    let err = Error::NotFoundError { path: "config.json".to_string() };
    assert_eq!(err.to_string(), "Input document not found: config.json.");
}
