use artifex_domain::{ArtifactTypes, BoundedContextConfiguration};
use artifex_kernel::BuildSettings;
use artifex_topology::{NamespaceMapper, StructureConfiguration, TopologyError};
use std::path::PathBuf;

/// Inputs of a build run besides the module itself.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory holding the bounded context configuration and the generated documents.
    pub root: PathBuf,
    /// Bounded context configuration, relative to `root`.
    pub bounded_context: PathBuf,
    pub generate_proxies: bool,
    pub settings: BuildSettings,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            bounded_context: PathBuf::from("bounded-context.json"),
            generate_proxies: false,
            settings: BuildSettings::default(),
        }
    }
}

/// Resolved configuration shared by every stage of one run.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub bounded_context: BoundedContextConfiguration,
    pub artifact_types: ArtifactTypes,
    pub use_modules: bool,
    /// Namespace prefixes removed before mapping, from settings and bounded context.
    pub strip: Vec<String>,
    pub concept_contract: String,
}

impl PipelineContext {
    #[must_use]
    pub fn new(bounded_context: BoundedContextConfiguration, settings: &BuildSettings) -> Self {
        let mut strip = bounded_context.namespace_segments_to_strip.clone();
        for prefix in &settings.namespace_segments_to_strip {
            if !strip.contains(prefix) {
                strip.push(prefix.clone());
            }
        }

        Self {
            use_modules: settings.use_modules || bounded_context.use_modules,
            artifact_types: settings.artifact_types(),
            concept_contract: settings.concept_contract.clone(),
            strip,
            bounded_context,
        }
    }

    pub fn namespace_mapper(&self) -> Result<NamespaceMapper, TopologyError> {
        let structure = self
            .bounded_context
            .structure_formats
            .iter()
            .fold(StructureConfiguration::builder(), |builder, format| builder.include(format))
            .build()?;
        Ok(NamespaceMapper::new(structure, self.strip.clone(), self.use_modules))
    }
}
