use crate::document::BOUNDED_CONTEXT_FILE;
use crate::error::{StoreError, StoreErrorExt};
use crate::security::normalize_relative;
use crate::store::ConfigurationStore;
use private::Sealed;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug)]
struct StoreConfig {
    bounded_context: PathBuf,
    create: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { bounded_context: PathBuf::from(BOUNDED_CONTEXT_FILE), create: true }
    }
}

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct ConfigurationStoreBuilder<S: Sealed = NoRoot> {
    state: S,
    config: StoreConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> ConfigurationStoreBuilder<S> {
    /// Location of the bounded context configuration, relative to the root.
    #[must_use = "Sets the bounded context configuration path"]
    pub fn bounded_context(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.bounded_context = path.into();
        self
    }

    #[must_use = "Sets whether the root directory should be created if it does not exist"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.config.create = enable;
        self
    }

    fn transition<N: Sealed>(self, state: N) -> ConfigurationStoreBuilder<N> {
        ConfigurationStoreBuilder { state, config: self.config }
    }
}

impl ConfigurationStoreBuilder<NoRoot> {
    #[must_use = "Creates a new store builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the root directory of the store"]
    pub fn root(self, path: impl Into<PathBuf>) -> ConfigurationStoreBuilder<WithRoot> {
        self.transition(WithRoot(path.into()))
    }
}

impl ConfigurationStoreBuilder<WithRoot> {
    /// Resolves the root directory and returns the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PathTraversalAttempt`] if the bounded context path leaves the root.
    /// Returns [`StoreError::Io`] if the root cannot be created or resolved.
    pub fn build(self) -> Result<ConfigurationStore, StoreError> {
        let root = &self.state.0;
        let bounded_context = normalize_relative(&self.config.bounded_context)
            .context("Invalid bounded context path")?;

        if self.config.create {
            fs::create_dir_all(root)
                .context(format!("Failed to create store root: {}", root.display()))?;
        }

        let root = fs::canonicalize(root)
            .context(format!("Failed to resolve store root: {}", root.display()))?;
        debug!(root = %root.display(), "Configuration store ready");

        Ok(ConfigurationStore { root, bounded_context })
    }
}
