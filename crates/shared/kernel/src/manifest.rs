use crate::error::{KernelError, KernelErrorExt};
use artifex_domain::TypeDescriptor;
use fxhash::FxHashSet;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source of the exported types of a compiled module and the modules it references.
pub trait TypeMetadataProvider {
    /// Name of the module the pipeline runs for.
    fn module_name(&self) -> &str;

    /// Every exported type of the module and, transitively, of its referenced modules.
    fn exported_types(&self) -> Result<Vec<TypeDescriptor>, KernelError>;
}

/// JSON description of a compiled module, emitted next to the compiled artifact.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleManifest {
    pub module: String,
    /// Manifests of referenced modules, relative to this manifest.
    #[serde(default)]
    pub references: Vec<PathBuf>,
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

impl ModuleManifest {
    pub fn from_json(json: &str) -> Result<Self, KernelError> {
        let mut manifest: Self = serde_json::from_str(json)?;
        for ty in &mut manifest.types {
            if ty.module.is_empty() {
                ty.module.clone_from(&manifest.module);
            }
        }
        Ok(manifest)
    }
}

/// Reads a module manifest together with every manifest it references.
#[derive(Debug)]
pub struct ManifestProvider {
    module: String,
    manifests: Vec<ModuleManifest>,
}

impl ManifestProvider {
    /// Opens the manifest at `path` and loads its references recursively, each file once.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, KernelError> {
        let mut seen = FxHashSet::default();
        let mut manifests = Vec::new();
        let mut pending = vec![path.as_ref().to_path_buf()];

        while let Some(path) = pending.pop() {
            let canonical = fs::canonicalize(&path)
                .context(format!("Module manifest not found: {}", path.display()))?;
            if !seen.insert(canonical.clone()) {
                continue;
            }

            let json = fs::read_to_string(&canonical)
                .context(format!("Failed to read {}", canonical.display()))?;
            let manifest = ModuleManifest::from_json(&json)
                .context(format!("{}", canonical.display()))?;
            debug!(
                module = %manifest.module,
                types = manifest.types.len(),
                path = %canonical.display(),
                "Loaded module manifest"
            );

            let base = canonical.parent().map(Path::to_path_buf).unwrap_or_default();
            pending.extend(manifest.references.iter().rev().map(|r| base.join(r)));
            manifests.push(manifest);
        }

        let module = manifests.first().map(|m| m.module.clone()).unwrap_or_default();
        Ok(Self { module, manifests })
    }

    /// Names of all loaded modules, starting with the opened one.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.manifests.iter().map(|m| m.module.as_str())
    }
}

impl TypeMetadataProvider for ManifestProvider {
    fn module_name(&self) -> &str {
        &self.module
    }

    fn exported_types(&self) -> Result<Vec<TypeDescriptor>, KernelError> {
        Ok(self.manifests.iter().flat_map(|m| m.types.iter().cloned()).collect())
    }
}

/// Provider over types already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    module: String,
    types: Vec<TypeDescriptor>,
}

impl InMemoryProvider {
    #[must_use]
    pub fn new(module: impl Into<String>, types: Vec<TypeDescriptor>) -> Self {
        Self { module: module.into(), types }
    }
}

impl TypeMetadataProvider for InMemoryProvider {
    fn module_name(&self) -> &str {
        &self.module
    }

    fn exported_types(&self) -> Result<Vec<TypeDescriptor>, KernelError> {
        Ok(self.types.clone())
    }
}
