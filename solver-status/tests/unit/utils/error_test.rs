use super::*;

#[test]
fn can_create_error_from_different_sources() {
    assert_eq!(GenericError::from("message").to_string(), "message");
    assert_eq!(GenericError::from("message".to_string()).to_string(), "message");

    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no file");
    assert_eq!(GenericError::from(io_error).to_string(), "no file");
}

#[test]
fn can_propagate_io_error_with_question_mark() {
    fn open_missing() -> GenericResult<std::fs::File> {
        Ok(std::fs::File::open("/non/existing/file.json")?)
    }

    assert!(open_missing().is_err());
}
