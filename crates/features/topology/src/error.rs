use std::borrow::Cow;

#[artifex_derive::artifex_error]
pub enum TopologyError {
    #[error("Unable to identify feature{}: {}", format_context(.context), .artifacts.join(", "))]
    UnableToIdentify { artifacts: Vec<String>, context: Option<Cow<'static, str>> },

    #[error("Invalid structure format '{format}'{}: {reason}", format_context(.context))]
    InvalidStructureFormat {
        format: String,
        reason: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },
}
