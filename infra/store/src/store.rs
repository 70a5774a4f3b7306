use crate::builder::ConfigurationStoreBuilder;
use crate::document::{ARTIFACTS_FILE, Document, DocumentKind, STATE_DIR, TOPOLOGY_FILE};
use crate::error::{StoreError, StoreErrorExt};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const TMP_SUFFIX: &str = "artifextmp";

/// Reads and writes the pipeline's JSON documents below a root directory.
///
/// Every save replaces the whole file: the new content goes to a temporary sibling that is
/// synced and renamed over the target, so an interrupted run never leaves half a document.
#[derive(Debug, Clone)]
pub struct ConfigurationStore {
    pub(crate) root: PathBuf,
    pub(crate) bounded_context: PathBuf,
}

impl ConfigurationStore {
    #[must_use = "The builder must be given a root before the store can be built"]
    pub fn builder() -> ConfigurationStoreBuilder {
        ConfigurationStoreBuilder::new()
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the file backing a document kind.
    #[must_use]
    pub fn path_of(&self, kind: DocumentKind) -> PathBuf {
        match kind {
            DocumentKind::BoundedContext => self.root.join(&self.bounded_context),
            DocumentKind::Topology => self.root.join(STATE_DIR).join(TOPOLOGY_FILE),
            DocumentKind::Artifacts => self.root.join(STATE_DIR).join(ARTIFACTS_FILE),
        }
    }

    #[must_use]
    pub fn exists<D: Document>(&self) -> bool {
        self.path_of(D::KIND).is_file()
    }

    /// Loads a document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingConfiguration`] if the file does not exist.
    /// Returns [`StoreError::Json`] if the file is not a valid document.
    pub fn load<D: Document>(&self) -> Result<D, StoreError> {
        let path = self.path_of(D::KIND);

        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::MissingConfiguration {
                    path: path.display().to_string().into(),
                    context: Some(D::KIND.to_string().into()),
                });
            },
            Err(err) => {
                return Err(StoreError::Io {
                    source: err,
                    context: Some(format!("Read failed: {}", path.display()).into()),
                });
            },
        };

        let document = serde_json::from_str(&json).context(path.display().to_string())?;
        debug!(kind = %D::KIND, path = %path.display(), "Loaded document");
        Ok(document)
    }

    /// Loads a document, starting from an empty one when it has never been saved.
    pub fn load_or_default<D: Document>(&self) -> Result<D, StoreError> {
        match self.load() {
            Err(StoreError::MissingConfiguration { .. }) => {
                info!(kind = %D::KIND, "No previous document, starting empty");
                Ok(D::default())
            },
            other => other,
        }
    }

    /// Saves a document as pretty JSON, replacing the previous file.
    pub fn save<D: Document>(&self, document: &D) -> Result<PathBuf, StoreError> {
        let path = self.path_of(D::KIND);
        let mut json = serde_json::to_vec_pretty(document).context(D::KIND.to_string())?;
        json.push(b'\n');

        write_atomic(&path, &json)?;
        debug!(kind = %D::KIND, path = %path.display(), "Saved document");
        Ok(path)
    }
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory {}", parent.display()))?;
    }

    let temp = path.with_extension(TMP_SUFFIX);
    {
        let mut file =
            fs::File::create(&temp).context(format!("Temp creation failed: {}", temp.display()))?;
        file.write_all(data).context("Write failed")?;
        file.sync_all().context("Sync failed")?;
    }

    if let Err(err) = fs::rename(&temp, path) {
        if err.kind() == std::io::ErrorKind::AlreadyExists {
            fs::remove_file(path)
                .context(format!("Failed to replace existing file: {}", path.display()))?;
            fs::rename(&temp, path).context(format!(
                "Swap failed: {} -> {}",
                temp.display(),
                path.display()
            ))?;
        } else {
            let _ = fs::remove_file(&temp);
            return Err(StoreError::Io {
                source: err,
                context: Some(
                    format!("Swap failed: {} -> {}", temp.display(), path.display()).into(),
                ),
            });
        }
    }

    Ok(())
}
