use std::borrow::Cow;

#[artifex_derive::artifex_error]
pub enum ProxyError {
    #[error("Invalid proxy template{}: {source}", format_context(.context))]
    Template { source: handlebars::TemplateError, context: Option<Cow<'static, str>> },

    #[error("Proxy rendering failed{}: {source}", format_context(.context))]
    Render { source: handlebars::RenderError, context: Option<Cow<'static, str>> },

    #[error("Artifact missing from the artifacts configuration{}: {artifact}", format_context(.context))]
    UnknownArtifact { artifact: String, context: Option<Cow<'static, str>> },

    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}
