use artifex_kernel::KernelError;
use std::borrow::Cow;

#[artifex_derive::artifex_error]
pub enum DiscoveryError {
    #[error("Invalid artifact{}: {}", format_context(.context), .artifacts.join(", "))]
    InvalidArtifact { artifacts: Vec<String>, context: Option<Cow<'static, str>> },

    #[error("Type metadata unavailable{}: {source}", format_context(.context))]
    Kernel { source: KernelError, context: Option<Cow<'static, str>> },
}
