use crate::context::{BuildOptions, PipelineContext};
use crate::error::{BuildError, BuildErrorExt};
use artifex_artifacts::ArtifactsConfigurationBuilder;
use artifex_discovery::ArtifactClassifier;
use artifex_domain::{
    ArtifactDescriptor, ArtifactKind, ArtifactsConfiguration, BoundedContextConfiguration,
    Topology, TypeDescriptor,
};
use artifex_kernel::{TypeCatalog, TypeMetadataProvider};
use artifex_proxies::{ProxyGenerator, write_proxies};
use artifex_store::ConfigurationStore;
use artifex_topology::resolve_topology;
use artifex_validation::{EventValidator, validate_event_processors};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Summary of a successful build run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub artifacts: usize,
    pub features: usize,
    pub added: usize,
    pub moved: usize,
    /// Artifacts whose generation was bumped.
    pub changed: usize,
    pub proxies: usize,
}

/// One build run over a compiled module.
///
/// Stages run in order: discovery, topology, artifact reconciliation, validation,
/// persistence and proxy generation. Documents are only written after every check passed.
pub struct Pipeline<'a> {
    provider: &'a dyn TypeMetadataProvider,
    options: BuildOptions,
}

impl fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("module", &self.provider.module_name())
            .field("options", &self.options)
            .finish()
    }
}

impl<'a> Pipeline<'a> {
    #[must_use]
    pub fn new(provider: &'a dyn TypeMetadataProvider, options: BuildOptions) -> Self {
        Self { provider, options }
    }

    #[instrument(skip_all, fields(module = %self.provider.module_name()))]
    pub fn run(&self) -> Result<BuildReport, BuildError> {
        let store = ConfigurationStore::builder()
            .root(&self.options.root)
            .bounded_context(&self.options.bounded_context)
            .create(false)
            .build()
            .context("Opening configuration store")?;

        let bounded_context: BoundedContextConfiguration = store.load()?;
        let context = PipelineContext::new(bounded_context, &self.options.settings);
        debug!(
            bounded_context = %context.bounded_context.bounded_context_name,
            use_modules = context.use_modules,
            "Loaded bounded context"
        );

        let types = self
            .provider
            .exported_types()
            .context(format!("Reading types of {}", self.provider.module_name()))?;
        let artifacts = ArtifactClassifier::new(&context.artifact_types).classify(&types)?;

        let mapper = context.namespace_mapper()?;
        let resolved = resolve_topology(&artifacts, &mapper, store.load_or_default::<Topology>()?)?;

        let mut outcome = ArtifactsConfigurationBuilder::new(&artifacts, &resolved.features)
            .build(store.load_or_default::<ArtifactsConfiguration>()?)?;
        outcome.bump_changed_generations();

        validate(&context, &types, &artifacts)?;
        let proxies_path =
            self.options.generate_proxies.then(|| self.proxies_path(&store)).transpose()?;

        store.save(&resolved.topology)?;
        store.save(&outcome.configuration)?;

        let proxies = match proxies_path {
            Some(base) => generate_proxies(base, &context, &artifacts, &outcome.configuration)?,
            None => 0,
        };

        let report = BuildReport {
            artifacts: artifacts.len(),
            features: resolved.topology.all_features().len(),
            added: outcome.added,
            moved: outcome.moved,
            changed: outcome.changed.len(),
            proxies,
        };
        info!(
            artifacts = report.artifacts,
            features = report.features,
            added = report.added,
            changed = report.changed,
            "Build finished"
        );
        Ok(report)
    }

    /// Relative proxy paths are taken from the store root.
    fn proxies_path(&self, store: &ConfigurationStore) -> Result<PathBuf, BuildError> {
        let path = self.options.settings.proxies_path.as_ref().ok_or_else(|| {
            BuildError::Configuration {
                message: "Proxy generation requires a proxies path".into(),
                context: None,
            }
        })?;
        Ok(if path.is_absolute() { path.clone() } else { store.root().join(path) })
    }
}

fn generate_proxies(
    base: PathBuf,
    context: &PipelineContext,
    artifacts: &[ArtifactDescriptor],
    configuration: &ArtifactsConfiguration,
) -> Result<usize, BuildError> {
    let proxies =
        ProxyGenerator::new(base, context.strip.clone())?.generate(artifacts, configuration)?;
    write_proxies(&proxies)?;
    Ok(proxies.len())
}

fn validate(
    context: &PipelineContext,
    types: &[TypeDescriptor],
    artifacts: &[ArtifactDescriptor],
) -> Result<(), BuildError> {
    validate_event_processors(types)?;

    let events: Vec<&TypeDescriptor> =
        artifacts.iter().filter(|a| a.kind == ArtifactKind::Event).map(|a| &a.ty).collect();
    if events.is_empty() {
        return Ok(());
    }

    let catalog = TypeCatalog::new(types);
    let mut validator = EventValidator::new(&catalog).concept_contract(&context.concept_contract);
    if let Some(contract) = context.artifact_types.contract(ArtifactKind::Event) {
        validator = validator.event_contract(contract);
    }
    validator.validate(&events)?;
    Ok(())
}
