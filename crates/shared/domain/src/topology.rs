//! The persisted topology document: modules owning nested features.

use crate::ids::{Feature, Module};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A feature and its nested sub-features.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDefinition {
    pub name: String,
    /// Full segment chain from the top-level feature down to this one.
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub sub_features: BTreeMap<Feature, FeatureDefinition>,
}

impl FeatureDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, path: Vec<String>) -> Self {
        Self { name: name.into(), path, sub_features: BTreeMap::new() }
    }

    /// Finds a direct sub-feature by name.
    #[must_use]
    pub fn sub_feature_named(&self, name: &str) -> Option<(&Feature, &FeatureDefinition)> {
        self.sub_features.iter().find(|(_, f)| f.name == name)
    }

    /// Total number of features in this subtree, including itself.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.sub_features.values().map(Self::count).sum::<usize>()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDefinition {
    pub name: String,
    #[serde(default)]
    pub features: BTreeMap<Feature, FeatureDefinition>,
}

impl ModuleDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), features: BTreeMap::new() }
    }
}

/// Feature identities of a bounded context.
///
/// Top-level features live either under a module (when modules are in use) or directly in
/// `features`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topology {
    #[serde(default)]
    pub modules: BTreeMap<Module, ModuleDefinition>,
    #[serde(default)]
    pub features: BTreeMap<Feature, FeatureDefinition>,
}

impl Topology {
    #[must_use]
    pub fn module_named(&self, name: &str) -> Option<(&Module, &ModuleDefinition)> {
        self.modules.iter().find(|(_, m)| m.name == name)
    }

    /// Every feature in the document, depth first, with its path.
    #[must_use]
    pub fn all_features(&self) -> Vec<(Feature, &FeatureDefinition)> {
        fn walk<'a>(
            features: &'a BTreeMap<Feature, FeatureDefinition>,
            out: &mut Vec<(Feature, &'a FeatureDefinition)>,
        ) {
            for (id, def) in features {
                out.push((*id, def));
                walk(&def.sub_features, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.features, &mut out);
        for module in self.modules.values() {
            walk(&module.features, &mut out);
        }
        out
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_features_walks_modules_and_nested_features() {
        let mut carts = FeatureDefinition::new("Carts", vec!["Carts".to_owned()]);
        carts.sub_features.insert(
            Feature::new(),
            FeatureDefinition::new("Items", vec!["Carts".to_owned(), "Items".to_owned()]),
        );
        let mut module = ModuleDefinition::new("Shop");
        module.features.insert(Feature::new(), carts);

        let mut topology = Topology::default();
        topology.modules.insert(Module::new(), module);
        topology.features.insert(Feature::new(), FeatureDefinition::new("Billing", vec![]));

        let names: Vec<_> = topology.all_features().iter().map(|(_, f)| f.name.clone()).collect();
        assert_eq!(names, vec!["Billing", "Carts", "Items"]);
        assert!(topology.module_named("Shop").is_some());
    }
}
