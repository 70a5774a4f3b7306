use crate::violation::{EventViolation, ProcessorMethod};
use std::borrow::Cow;
use uuid::Uuid;

#[artifex_derive::artifex_error]
pub enum ValidationError {
    #[error("Invalid event{}: {}", format_context(.context), list(.violations))]
    InvalidEvent { violations: Vec<EventViolation>, context: Option<Cow<'static, str>> },

    #[error("Event processor with empty id{}: {method}", format_context(.context))]
    InvalidEventProcessor { method: ProcessorMethod, context: Option<Cow<'static, str>> },

    #[error("Duplicate event processor ids{}: {}", format_context(.context), list_duplicates(.duplicates))]
    DuplicateEventProcessor {
        duplicates: Vec<(Uuid, Vec<ProcessorMethod>)>,
        context: Option<Cow<'static, str>>,
    },
}

fn list(violations: &[EventViolation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

fn list_duplicates(duplicates: &[(Uuid, Vec<ProcessorMethod>)]) -> String {
    duplicates
        .iter()
        .map(|(id, methods)| {
            let methods = methods.iter().map(ToString::to_string).collect::<Vec<_>>();
            format!("{id} [{}]", methods.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ")
}
