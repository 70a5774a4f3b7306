use crate::error::TopologyError;
use crate::path::FeaturePath;
use crate::structure::NamespaceMapper;
use artifex_domain::{
    ArtifactDescriptor, Feature, FeatureDefinition, Module, ModuleDefinition, Topology,
};
use std::collections::BTreeMap;
use tracing::{debug, error, info};

type Features = BTreeMap<Feature, FeatureDefinition>;

/// Reconciles feature paths against the previously persisted topology.
///
/// Identities are reused only for an exact match of the module name and the full segment
/// chain; anything else mints a new id. Entries of the previous topology that are not
/// resolved again are carried over untouched.
#[derive(Debug)]
pub struct TopologyResolver {
    previous: Topology,
    current: Topology,
}

impl TopologyResolver {
    #[must_use]
    pub fn new(previous: Topology) -> Self {
        Self { previous, current: Topology::default() }
    }

    /// Returns the id of the leaf feature of `path`, recording the chain.
    pub fn resolve(&mut self, path: &FeaturePath) -> Option<Feature> {
        if path.features.is_empty() {
            return None;
        }

        let (previous, current) = match &path.module {
            Some(name) => {
                let module = find_module(&self.previous, &self.current, name);
                let previous = self.previous.modules.get(&module).map(|m| &m.features);
                let current = &mut self
                    .current
                    .modules
                    .entry(module)
                    .or_insert_with(|| ModuleDefinition::new(name.clone()))
                    .features;
                (previous, current)
            },
            None => (Some(&self.previous.features), &mut self.current.features),
        };

        Some(resolve_chain(previous, current, &path.features))
    }

    /// The reconciled topology, including carried-over entries of the previous one.
    #[must_use]
    pub fn finish(self) -> Topology {
        let mut topology = self.current;
        merge_features(&self.previous.features, &mut topology.features);
        for (id, previous) in &self.previous.modules {
            match topology.modules.get_mut(id) {
                Some(module) => merge_features(&previous.features, &mut module.features),
                None => {
                    topology.modules.insert(*id, previous.clone());
                },
            }
        }
        topology
    }
}

fn find_module(previous: &Topology, current: &Topology, name: &str) -> Module {
    current
        .module_named(name)
        .or_else(|| previous.module_named(name))
        .map_or_else(Module::new, |(id, _)| *id)
}

fn resolve_chain(mut previous: Option<&Features>, mut current: &mut Features, chain: &[String]) -> Feature {
    let mut leaf = Feature::nil();

    for (depth, name) in chain.iter().enumerate() {
        let path = &chain[..=depth];

        let existing = current
            .iter()
            .find(|(_, f)| f.name == *name)
            .map(|(id, _)| *id)
            .or_else(|| {
                previous.and_then(|features| {
                    features.iter().find(|(_, f)| f.name == *name && f.path == path).map(|(id, _)| *id)
                })
            });

        let id = existing.unwrap_or_else(|| {
            let id = Feature::new();
            debug!(feature = %name, %id, "Minted feature");
            id
        });

        previous = previous.and_then(|features| features.get(&id)).map(|f| &f.sub_features);
        current = &mut current
            .entry(id)
            .or_insert_with(|| FeatureDefinition::new(name.clone(), path.to_vec()))
            .sub_features;
        leaf = id;
    }

    leaf
}

fn merge_features(previous: &Features, current: &mut Features) {
    for (id, feature) in previous {
        match current.get_mut(id) {
            Some(existing) => merge_features(&feature.sub_features, &mut existing.sub_features),
            None => {
                current.insert(*id, feature.clone());
            },
        }
    }
}

/// Result of resolving the topology of a set of artifacts.
#[derive(Debug, Clone)]
pub struct ResolvedTopology {
    pub topology: Topology,
    /// Leaf feature of each artifact, by module-qualified type name.
    pub features: BTreeMap<String, Feature>,
}

impl ResolvedTopology {
    #[must_use]
    pub fn feature_of(&self, artifact: &ArtifactDescriptor) -> Option<Feature> {
        self.features.get(&artifact.type_reference()).copied()
    }
}

/// Maps every artifact to a feature and reconciles the topology in one pass.
///
/// Artifacts whose namespace cannot be mapped are all reported together.
pub fn resolve_topology(
    artifacts: &[ArtifactDescriptor],
    mapper: &NamespaceMapper,
    previous: Topology,
) -> Result<ResolvedTopology, TopologyError> {
    let mut resolver = TopologyResolver::new(previous);
    let mut features = BTreeMap::new();
    let mut unidentified = Vec::new();

    for artifact in artifacts {
        let feature = mapper.map(&artifact.namespace).and_then(|path| resolver.resolve(&path));
        match feature {
            Some(feature) => {
                features.insert(artifact.type_reference(), feature);
            },
            None => unidentified.push(artifact.type_reference()),
        }
    }

    if !unidentified.is_empty() {
        for artifact in &unidentified {
            error!(artifact = %artifact, "Unable to identify the feature of artifact");
        }
        return Err(TopologyError::UnableToIdentify { artifacts: unidentified, context: None });
    }

    let topology = resolver.finish();
    info!(features = topology.all_features().len(), modules = topology.modules.len(), "Resolved topology");
    Ok(ResolvedTopology { topology, features })
}
