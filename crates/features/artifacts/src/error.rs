use artifex_domain::ArtifactId;
use std::borrow::Cow;

#[artifex_derive::artifex_error]
pub enum ArtifactsError {
    #[error("Duplicate artifact id{}: {}", format_context(.context), join(.artifacts))]
    DuplicateArtifactId { artifacts: Vec<ArtifactId>, context: Option<Cow<'static, str>> },

    #[error("Artifact without a resolved feature{}: {}", format_context(.context), .artifacts.join(", "))]
    UnresolvedFeature { artifacts: Vec<String>, context: Option<Cow<'static, str>> },
}

fn join(ids: &[ArtifactId]) -> String {
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
