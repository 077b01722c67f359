use std::io;
use std::path::PathBuf;

use pystamp::error::Error;

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
    let err = Error::ValidationError("bad name".to_string());
    assert_eq!(err.to_string(), "Validation error: bad name.");

    let err = Error::FsError {
        path: PathBuf::from("/tmp/out/src"),
        source: io::Error::new(io::ErrorKind::AlreadyExists, "exists"),
    };
    assert!(err.to_string().contains("'/tmp/out/src'"));
}
