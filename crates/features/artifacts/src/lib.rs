//! Artifact configuration stage: assigns each artifact a stable id and a generation that
//! advances whenever its shape changes.

mod builder;
mod error;

pub use builder::{ArtifactsConfigurationBuilder, BuildOutcome};
pub use error::{ArtifactsError, ArtifactsErrorExt};
