use artifex_derive::artifex_error;
use std::borrow::Cow;

#[artifex_error]
pub enum StoreError {
    #[error("I/O failure{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read(path: &str) -> Result<String, StoreError> {
    std::fs::read_to_string(path).context("Reading document")
}

fn main() {
    let _ = read("missing.json");
    let err: StoreError = "boom".into();
    assert_eq!(err.code(), "Internal");
}
