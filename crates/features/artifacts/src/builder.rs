use crate::error::ArtifactsError;
use artifex_domain::{
    ArtifactDefinition, ArtifactDescriptor, ArtifactId, ArtifactsConfiguration, Feature,
};
use std::collections::BTreeMap;
use tracing::{debug, error, info};

/// What a build changed in the artifact configuration.
#[derive(Debug, Clone, Default)]
pub struct BuildOutcome {
    pub configuration: ArtifactsConfiguration,
    /// Reused artifacts whose shape differs from the persisted one.
    pub changed: Vec<ArtifactId>,
    pub added: usize,
    /// Reused artifacts that now live under another feature or category.
    pub moved: usize,
}

impl BuildOutcome {
    /// Increments the generation of every changed artifact.
    pub fn bump_changed_generations(&mut self) {
        for id in &self.changed {
            self.configuration.bump_generation(*id);
        }
    }
}

/// Reconciles discovered artifacts with the previously persisted configuration.
///
/// Definitions are matched by module-qualified type name anywhere in the document, so an
/// artifact keeps its id and generation when its feature or category changes. Definitions of
/// artifacts that were not discovered again stay in the document.
#[derive(Debug)]
pub struct ArtifactsConfigurationBuilder<'a> {
    artifacts: &'a [ArtifactDescriptor],
    features: &'a BTreeMap<String, Feature>,
}

impl<'a> ArtifactsConfigurationBuilder<'a> {
    /// `features` maps each artifact's type reference to its resolved leaf feature.
    #[must_use]
    pub const fn new(
        artifacts: &'a [ArtifactDescriptor],
        features: &'a BTreeMap<String, Feature>,
    ) -> Self {
        Self { artifacts, features }
    }

    pub fn build(&self, previous: ArtifactsConfiguration) -> Result<BuildOutcome, ArtifactsError> {
        let unresolved: Vec<String> = self
            .artifacts
            .iter()
            .map(|a| a.type_reference())
            .filter(|type_ref| !self.features.contains_key(type_ref))
            .collect();
        if !unresolved.is_empty() {
            return Err(ArtifactsError::UnresolvedFeature { artifacts: unresolved, context: None });
        }

        let mut outcome = BuildOutcome { configuration: previous, ..BuildOutcome::default() };

        for artifact in self.artifacts {
            let type_ref = artifact.type_reference();
            let feature = self.features[&type_ref];
            let shape = artifact.shape();

            let existing = outcome
                .configuration
                .find_by_type_reference(&type_ref)
                .map(|(location, definition)| (location, definition.clone()));

            let Some((location, mut definition)) = existing else {
                let definition = ArtifactDefinition::new(type_ref, shape);
                debug!(artifact = %definition.type_ref, id = %definition.artifact, "New artifact");
                outcome.configuration.insert(feature, artifact.kind, definition);
                outcome.added += 1;
                continue;
            };

            if definition.shape != shape {
                debug!(artifact = %type_ref, id = %definition.artifact, "Artifact shape changed");
                outcome.changed.push(definition.artifact);
                definition.shape = shape;
            }

            if location.feature != feature || location.kind != artifact.kind {
                debug!(artifact = %type_ref, from = %location.feature, to = %feature, "Artifact moved");
                outcome.moved += 1;
            }
            outcome.configuration.remove(location);
            outcome.configuration.insert(feature, artifact.kind, definition);
        }

        let duplicates: Vec<ArtifactId> =
            outcome.configuration.duplicate_ids().into_iter().collect();
        if !duplicates.is_empty() {
            for id in &duplicates {
                error!(%id, "Artifact id is used more than once");
            }
            return Err(ArtifactsError::DuplicateArtifactId { artifacts: duplicates, context: None });
        }

        info!(
            artifacts = outcome.configuration.len(),
            added = outcome.added,
            moved = outcome.moved,
            changed = outcome.changed.len(),
            "Built artifacts configuration"
        );
        Ok(outcome)
    }
}
