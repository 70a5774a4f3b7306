use artifex_derive::artifex_error;
use std::borrow::Cow;

#[artifex_error]
pub enum SampleError {
    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid event{}: {}", format_context(.context), .events.join(", "))]
    InvalidEvent { events: Vec<String>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn source_errors_convert_with_context() {
    let err = failing_io().context("Loading manifest").expect_err("io should fail");

    assert_eq!(err.code(), "Io");
    assert_eq!(err.to_string(), "I/O failure (Loading manifest): gone");
}

#[test]
fn question_mark_converts_source_errors() {
    fn run() -> Result<(), SampleError> {
        failing_io()?;
        Ok(())
    }

    let err = run().expect_err("io should fail");
    assert!(matches!(err, SampleError::Io { context: None, .. }));
}

#[test]
fn context_is_attached_to_own_errors() {
    let result: Result<(), SampleError> = Err(SampleError::InvalidEvent {
        events: vec!["Domain.Carts.ItemAdded".to_owned(), "Domain.Carts.CartEmptied".to_owned()],
        context: None,
    });

    let err = result.context("validation pass").expect_err("should stay an error");
    assert_eq!(err.code(), "InvalidEvent");
    assert_eq!(
        err.to_string(),
        "Invalid event (validation pass): Domain.Carts.ItemAdded, Domain.Carts.CartEmptied"
    );
}

#[test]
fn internal_variant_accepts_strings() {
    let from_static: SampleError = "static message".into();
    let from_owned: SampleError = String::from("owned message").into();

    assert_eq!(from_static.to_string(), "Internal error: static message");
    assert_eq!(from_owned.code(), "Internal");
}
