//! Whole-document JSON persistence for the Artifex pipeline.
//!
//! The store owns three documents below a root directory (usually the project directory):
//!
//! | Document | File |
//! |---|---|
//! | [`BoundedContextConfiguration`](artifex_domain::BoundedContextConfiguration) | `bounded-context.json` (configurable) |
//! | [`Topology`](artifex_domain::Topology) | `.artifex/topology.json` |
//! | [`ArtifactsConfiguration`](artifex_domain::ArtifactsConfiguration) | `.artifex/artifacts.json` |
//!
//! The bounded context configuration is authored by hand and must exist. The other two are
//! produced by the pipeline and start empty on the first run.
//!
//! ```rust
//! use artifex_domain::Topology;
//! use artifex_store::{ConfigurationStore, StoreError};
//!
//! # fn main() -> Result<(), StoreError> {
//! # let tmp = tempfile::tempdir().unwrap();
//! let store = ConfigurationStore::builder().root(tmp.path()).build()?;
//!
//! let topology: Topology = store.load_or_default()?;
//! store.save(&topology)?;
//! assert!(store.exists::<Topology>());
//! # Ok(())
//! # }
//! ```

mod builder;
mod document;
mod error;
mod security;
mod store;

pub use builder::ConfigurationStoreBuilder;
pub use document::{Document, DocumentKind, STATE_DIR};
pub use error::{StoreError, StoreErrorExt};
pub use store::ConfigurationStore;
