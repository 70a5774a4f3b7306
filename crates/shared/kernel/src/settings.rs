use crate::error::{KernelError, KernelErrorExt};
use artifex_domain::ArtifactTypes;
use artifex_domain::constants::CONCEPT_CONTRACT;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment prefix for overrides, e.g. `ARTIFEX__USE_MODULES=true`.
pub const ENV_PREFIX: &str = "ARTIFEX";
/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_SETTINGS_FILE: &str = "artifex";

/// Tool-wide build settings. Every field is optional in the sources.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    /// Base directory of generated proxies, needed when proxy generation is requested.
    pub proxies_path: Option<PathBuf>,
    pub namespace_segments_to_strip: Vec<String>,
    pub use_modules: bool,
    /// Base type marking value wrappers that events must not carry.
    pub concept_contract: String,
    /// Replaces the default artifact categories when present.
    pub artifact_types: Option<ArtifactTypes>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            proxies_path: None,
            namespace_segments_to_strip: Vec::new(),
            use_modules: false,
            concept_contract: CONCEPT_CONTRACT.to_owned(),
            artifact_types: None,
            log_level: None,
            log_dir: None,
        }
    }
}

impl BuildSettings {
    #[must_use]
    pub fn artifact_types(&self) -> ArtifactTypes {
        self.artifact_types.clone().unwrap_or_default()
    }
}

/// Loads [`BuildSettings`] from a settings file layered with `ARTIFEX__*` environment variables.
///
/// An explicit `path` must exist. Without one, `artifex.toml` (or any other format the
/// `config` crate understands) in the working directory is used if present.
pub fn load_settings(path: Option<&Path>) -> Result<BuildSettings, KernelError> {
    let file = path.map_or_else(
        || File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        |p| File::from(p).required(true),
    );

    debug!(path = ?path, "Loading build settings");

    Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("namespace_segments_to_strip"),
        )
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<BuildSettings>()
        .context("Failed to deserialize settings")
}
