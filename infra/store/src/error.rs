use std::borrow::Cow;

/// A specialized [`StoreError`] enum of this crate.
#[artifex_derive::artifex_error]
pub enum StoreError {
    #[error("Missing configuration{}: {path}", format_context(.context))]
    MissingConfiguration { path: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Path traversal violation{}: {message}", format_context(.context))]
    PathTraversalAttempt { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Malformed document{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
}
