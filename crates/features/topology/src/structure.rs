use crate::error::{TopologyError, TopologyErrorExt};
use crate::format::StructureFormat;
use crate::path::FeaturePath;
use artifex_kernel::naming::strip_namespace;

/// Parsed structure formats, tried in order.
#[derive(Debug, Clone, Default)]
pub struct StructureConfiguration {
    formats: Vec<StructureFormat>,
}

impl StructureConfiguration {
    #[must_use]
    pub fn builder() -> StructureConfigurationBuilder {
        StructureConfigurationBuilder::default()
    }

    #[must_use]
    pub fn formats(&self) -> &[StructureFormat] {
        &self.formats
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct StructureConfigurationBuilder {
    formats: Vec<String>,
}

impl StructureConfigurationBuilder {
    #[must_use]
    pub fn include(mut self, format: impl Into<String>) -> Self {
        self.formats.push(format.into());
        self
    }

    pub fn build(self) -> Result<StructureConfiguration, TopologyError> {
        let formats = self
            .formats
            .iter()
            .map(|f| StructureFormat::parse(f))
            .collect::<Result<Vec<_>, _>>()
            .context("Building structure configuration")?;
        Ok(StructureConfiguration { formats })
    }
}

/// Maps artifact namespaces to feature paths.
///
/// The longest configured prefix is stripped first. Structure formats, when configured, are
/// tried in order. Without formats the leading segment is the area and is dropped; with
/// modules in use the next segment names the module. The remaining segments form the chain.
#[derive(Debug, Clone)]
pub struct NamespaceMapper {
    structure: StructureConfiguration,
    strip: Vec<String>,
    use_modules: bool,
}

impl NamespaceMapper {
    #[must_use]
    pub const fn new(structure: StructureConfiguration, strip: Vec<String>, use_modules: bool) -> Self {
        Self { structure, strip, use_modules }
    }

    #[must_use]
    pub fn map(&self, namespace: &str) -> Option<FeaturePath> {
        let segments = strip_namespace(namespace, &self.strip);

        let path = if self.structure.is_empty() {
            self.default_rule(&segments)
        } else {
            self.structure.formats().iter().find_map(|f| f.capture(&segments, self.use_modules))
        }?;

        (!path.features.is_empty()).then_some(path)
    }

    fn default_rule(&self, segments: &[&str]) -> Option<FeaturePath> {
        let (_area, rest) = segments.split_first()?;
        let (module, features) = if self.use_modules {
            let (module, features) = rest.split_first()?;
            (Some((*module).to_owned()), features)
        } else {
            (None, rest)
        };
        Some(FeaturePath::new(module, features.iter().map(|s| (*s).to_owned()).collect()))
    }
}
