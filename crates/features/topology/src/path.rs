use artifex_domain::{Feature, FeatureDefinition};

/// Where an artifact lives: an optional module and the feature chain below it.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct FeaturePath {
    pub module: Option<String>,
    /// Top-level feature first, leaf feature last.
    pub features: Vec<String>,
}

impl FeaturePath {
    #[must_use]
    pub fn new(module: Option<String>, features: Vec<String>) -> Self {
        Self { module, features }
    }

    /// Splits free-form text on `/`, `\` or `.` into a feature chain.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let features = path
            .split(['/', '\\', '.'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect();
        Self { module: None, features }
    }

    #[must_use]
    pub fn leaf(&self) -> Option<&str> {
        self.features.last().map(String::as_str)
    }
}

/// Builds a fresh feature chain from a path like `Carts/Items`.
///
/// Returns the top-level feature; nested segments become sub-features. Every id is new.
#[must_use]
pub fn feature_from_path(path: &str) -> Option<(Feature, FeatureDefinition)> {
    let chain = FeaturePath::parse(path).features;
    let mut nested: Option<(Feature, FeatureDefinition)> = None;

    for (depth, name) in chain.iter().enumerate().rev() {
        let mut definition = FeatureDefinition::new(name.clone(), chain[..=depth].to_vec());
        if let Some((id, child)) = nested.take() {
            definition.sub_features.insert(id, child);
        }
        nested = Some((Feature::new(), definition));
    }

    nested
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment_yields_one_feature() {
        let (id, feature) = feature_from_path("Feature1").expect("feature");

        assert_eq!(feature.name, "Feature1");
        assert!(feature.sub_features.is_empty());
        assert!(!id.is_nil());
    }

    #[test]
    fn separators_nest_sub_features() {
        let (_, carts) = feature_from_path("Carts/Items\\Lines").expect("feature");
        let (_, items) = carts.sub_features.iter().next().expect("items");
        let (_, lines) = items.sub_features.iter().next().expect("lines");

        assert_eq!(items.name, "Items");
        assert_eq!(lines.path, vec!["Carts", "Items", "Lines"]);
        assert_eq!(carts.count(), 3);
    }

    #[test]
    fn empty_path_has_no_feature() {
        assert!(feature_from_path(" / ").is_none());
    }
}
