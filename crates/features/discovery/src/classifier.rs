use crate::error::{DiscoveryError, DiscoveryErrorExt};
use artifex_domain::constants::NAMESPACE_SEPARATOR;
use artifex_domain::{ArtifactDescriptor, ArtifactTypes, TypeDescriptor};
use artifex_kernel::TypeMetadataProvider;
use tracing::{debug, error, info};

/// Minimum namespace depth of an artifact: an area plus at least one feature.
const MIN_NAMESPACE_SEGMENTS: usize = 2;

/// Classifies exported types into artifact categories.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactClassifier<'a> {
    artifact_types: &'a ArtifactTypes,
}

impl<'a> ArtifactClassifier<'a> {
    #[must_use]
    pub const fn new(artifact_types: &'a ArtifactTypes) -> Self {
        Self { artifact_types }
    }

    /// Discovers the artifacts of every type the provider exports.
    pub fn discover(
        &self,
        provider: &dyn TypeMetadataProvider,
    ) -> Result<Vec<ArtifactDescriptor>, DiscoveryError> {
        let types = provider
            .exported_types()
            .context(format!("Reading types of {}", provider.module_name()))?;
        self.classify(&types)
    }

    /// Keeps the concrete types satisfying a registered contract, tagged with the first
    /// matching category.
    ///
    /// Fails without a partial result when any artifact sits in an unusable namespace.
    pub fn classify(
        &self,
        types: &[TypeDescriptor],
    ) -> Result<Vec<ArtifactDescriptor>, DiscoveryError> {
        let artifacts: Vec<ArtifactDescriptor> = types
            .iter()
            .filter(|ty| ty.is_concrete())
            .filter_map(|ty| {
                self.artifact_types.first_match(ty).map(|category| {
                    debug!(artifact = %ty.full_name(), kind = %category.kind, "Classified artifact");
                    ArtifactDescriptor::new(category.kind, ty.clone())
                })
            })
            .collect();

        let invalid: Vec<String> = artifacts
            .iter()
            .filter(|artifact| !has_valid_namespace(artifact))
            .map(|artifact| artifact.type_reference())
            .collect();

        if !invalid.is_empty() {
            error!("Discovered artifacts with invalid namespaces");
            for artifact in &invalid {
                error!(artifact = %artifact, "Artifact namespace must have at least two segments");
            }
            return Err(DiscoveryError::InvalidArtifact { artifacts: invalid, context: None });
        }

        info!(count = artifacts.len(), "Discovered artifacts");
        Ok(artifacts)
    }
}

fn has_valid_namespace(ty: &TypeDescriptor) -> bool {
    let namespace = ty.namespace.trim();
    !namespace.is_empty()
        && namespace != "null"
        && namespace.split(NAMESPACE_SEPARATOR).all(|s| !s.is_empty())
        && namespace.split(NAMESPACE_SEPARATOR).count() >= MIN_NAMESPACE_SEGMENTS
}
