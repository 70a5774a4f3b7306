use artifex_derive::artifex_error;
use std::borrow::Cow;

#[artifex_error]
pub enum DiscoveryError {
    #[error("Invalid artifacts{}: {}", format_context(.context), .artifacts.join(", "))]
    InvalidArtifact { artifacts: Vec<String>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = DiscoveryError::InvalidArtifact { artifacts: vec!["A".to_owned()], context: None };
    assert_eq!(err.code(), "InvalidArtifact");
}
