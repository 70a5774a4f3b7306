use serde::{Deserialize, Serialize};

/// Per bounded context settings, read from `bounded-context.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoundedContextConfiguration {
    pub application: String,
    pub bounded_context: String,
    pub bounded_context_name: String,
    /// Treat the first mapped namespace segment as a module owning features.
    pub use_modules: bool,
    /// Structure formats mapping namespaces to module and feature paths.
    pub structure_formats: Vec<String>,
    /// Dotted namespace prefixes removed before mapping, e.g. `Shop.Domain`.
    pub namespace_segments_to_strip: Vec<String>,
}
