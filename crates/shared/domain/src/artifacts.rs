//! Artifact categories and the persisted artifact configuration document.

use crate::constants::{
    COMMAND_CONTRACT, EVENT_CONTRACT, EVENT_SOURCE_CONTRACT, QUERY_CONTRACT, READ_MODEL_CONTRACT,
};
use crate::ids::{ArtifactId, Feature};
use crate::types::TypeDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use strum_macros::{Display, EnumIter, EnumString};

/// Closed set of artifact categories recognised by the pipeline.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ArtifactKind {
    Command,
    Event,
    Query,
    ReadModel,
    EventSource,
}

/// A category together with the contract a type must satisfy to belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactTypeDescriptor {
    pub kind: ArtifactKind,
    #[serde(default)]
    pub name: String,
    pub contract: String,
}

impl ArtifactTypeDescriptor {
    #[must_use]
    pub fn new(kind: ArtifactKind, contract: impl Into<String>) -> Self {
        Self { kind, name: kind.to_string(), contract: contract.into() }
    }
}

/// Ordered registry of artifact categories. Order decides classification ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactTypes(Vec<ArtifactTypeDescriptor>);

impl ArtifactTypes {
    #[must_use]
    pub const fn new(descriptors: Vec<ArtifactTypeDescriptor>) -> Self {
        Self(descriptors)
    }

    /// The first category, in registry order, whose contract the type satisfies.
    #[must_use]
    pub fn first_match(&self, ty: &TypeDescriptor) -> Option<&ArtifactTypeDescriptor> {
        self.0.iter().find(|d| ty.is_assignable_to(&d.contract))
    }

    #[must_use]
    pub fn contract(&self, kind: ArtifactKind) -> Option<&str> {
        self.0.iter().find(|d| d.kind == kind).map(|d| d.contract.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtifactTypeDescriptor> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Default for ArtifactTypes {
    fn default() -> Self {
        Self(vec![
            ArtifactTypeDescriptor::new(ArtifactKind::Command, COMMAND_CONTRACT),
            ArtifactTypeDescriptor::new(ArtifactKind::Event, EVENT_CONTRACT),
            ArtifactTypeDescriptor::new(ArtifactKind::Query, QUERY_CONTRACT),
            ArtifactTypeDescriptor::new(ArtifactKind::ReadModel, READ_MODEL_CONTRACT),
            ArtifactTypeDescriptor::new(ArtifactKind::EventSource, EVENT_SOURCE_CONTRACT),
        ])
    }
}

/// Version counter of an artifact's shape. Starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Generation(u32);

impl Generation {
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<u32> for Generation {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Persisted identity of one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactDefinition {
    pub artifact: ArtifactId,
    pub generation: Generation,
    /// Module-qualified type name, e.g. `Domain.Carts.AddItem, Shop.Domain`.
    #[serde(rename = "type")]
    pub type_ref: String,
    #[serde(default)]
    pub shape: BTreeMap<String, String>,
}

impl ArtifactDefinition {
    #[must_use]
    pub fn new(type_ref: impl Into<String>, shape: BTreeMap<String, String>) -> Self {
        Self {
            artifact: ArtifactId::new(),
            generation: Generation::FIRST,
            type_ref: type_ref.into(),
            shape,
        }
    }
}

pub type Definitions = BTreeMap<ArtifactId, ArtifactDefinition>;

/// Artifact definitions of a single feature, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactsByKind {
    #[serde(default)]
    pub commands: Definitions,
    #[serde(default)]
    pub events: Definitions,
    #[serde(default)]
    pub queries: Definitions,
    #[serde(default)]
    pub read_models: Definitions,
    #[serde(default)]
    pub event_sources: Definitions,
}

impl ArtifactsByKind {
    #[must_use]
    pub const fn by_kind(&self, kind: ArtifactKind) -> &Definitions {
        match kind {
            ArtifactKind::Command => &self.commands,
            ArtifactKind::Event => &self.events,
            ArtifactKind::Query => &self.queries,
            ArtifactKind::ReadModel => &self.read_models,
            ArtifactKind::EventSource => &self.event_sources,
        }
    }

    pub const fn by_kind_mut(&mut self, kind: ArtifactKind) -> &mut Definitions {
        match kind {
            ArtifactKind::Command => &mut self.commands,
            ArtifactKind::Event => &mut self.events,
            ArtifactKind::Query => &mut self.queries,
            ArtifactKind::ReadModel => &mut self.read_models,
            ArtifactKind::EventSource => &mut self.event_sources,
        }
    }

    /// Every definition with its category, in category then id order.
    pub fn iter(&self) -> impl Iterator<Item = (ArtifactKind, &ArtifactDefinition)> {
        [
            (ArtifactKind::Command, &self.commands),
            (ArtifactKind::Event, &self.events),
            (ArtifactKind::Query, &self.queries),
            (ArtifactKind::ReadModel, &self.read_models),
            (ArtifactKind::EventSource, &self.event_sources),
        ]
        .into_iter()
        .flat_map(|(kind, defs)| defs.values().map(move |d| (kind, d)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Location of a definition inside an [`ArtifactsConfiguration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactLocation {
    pub feature: Feature,
    pub kind: ArtifactKind,
    pub artifact: ArtifactId,
}

/// The persisted artifact document: feature to categorized definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactsConfiguration(BTreeMap<Feature, ArtifactsByKind>);

impl ArtifactsConfiguration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, feature: &Feature) -> Option<&ArtifactsByKind> {
        self.0.get(feature)
    }

    pub fn features(&self) -> impl Iterator<Item = (&Feature, &ArtifactsByKind)> {
        self.0.iter()
    }

    /// Every definition in the document with its location.
    pub fn iter(&self) -> impl Iterator<Item = (ArtifactLocation, &ArtifactDefinition)> {
        self.0.iter().flat_map(|(feature, by_kind)| {
            by_kind.iter().map(move |(kind, def)| {
                (ArtifactLocation { feature: *feature, kind, artifact: def.artifact }, def)
            })
        })
    }

    /// Looks up a definition by module-qualified type name across every feature.
    #[must_use]
    pub fn find_by_type_reference(
        &self,
        type_ref: &str,
    ) -> Option<(ArtifactLocation, &ArtifactDefinition)> {
        self.iter().find(|(_, def)| def.type_ref == type_ref)
    }

    pub fn insert(&mut self, feature: Feature, kind: ArtifactKind, definition: ArtifactDefinition) {
        self.0.entry(feature).or_default().by_kind_mut(kind).insert(definition.artifact, definition);
    }

    /// Removes the definition at `location`, dropping the feature entry once it is empty.
    pub fn remove(&mut self, location: ArtifactLocation) -> Option<ArtifactDefinition> {
        let by_kind = self.0.get_mut(&location.feature)?;
        let removed = by_kind.by_kind_mut(location.kind).remove(&location.artifact);
        if by_kind.is_empty() {
            self.0.remove(&location.feature);
        }
        removed
    }

    /// Increments the generation of an artifact. Returns `false` when it is unknown.
    pub fn bump_generation(&mut self, artifact: ArtifactId) -> bool {
        for by_kind in self.0.values_mut() {
            for kind in [
                ArtifactKind::Command,
                ArtifactKind::Event,
                ArtifactKind::Query,
                ArtifactKind::ReadModel,
                ArtifactKind::EventSource,
            ] {
                if let Some(def) = by_kind.by_kind_mut(kind).get_mut(&artifact) {
                    def.generation = def.generation.next();
                    return true;
                }
            }
        }
        false
    }

    pub fn artifact_ids(&self) -> impl Iterator<Item = ArtifactId> + '_ {
        self.iter().map(|(location, _)| location.artifact)
    }

    /// Ids that occur more than once across the whole document.
    #[must_use]
    pub fn duplicate_ids(&self) -> BTreeSet<ArtifactId> {
        let mut seen = BTreeSet::new();
        self.artifact_ids().filter(|id| !seen.insert(*id)).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(ArtifactsByKind::is_empty)
    }
}
