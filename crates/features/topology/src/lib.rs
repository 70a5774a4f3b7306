//! Topology stage: maps artifact namespaces onto modules and features and keeps their
//! identities stable across builds.
//!
//! ```rust
//! use artifex_topology::StructureConfiguration;
//!
//! let structure = StructureConfiguration::builder()
//!     .include("[.]{Area}.{Feature}.*{SubFeature}")
//!     .include("[.]{Area}.{Feature}")
//!     .build()
//!     .unwrap();
//! assert_eq!(structure.formats().len(), 2);
//! ```

mod error;
mod format;
mod path;
mod resolver;
mod structure;

pub use error::{TopologyError, TopologyErrorExt};
pub use format::StructureFormat;
pub use path::{FeaturePath, feature_from_path};
pub use resolver::{ResolvedTopology, TopologyResolver, resolve_topology};
pub use structure::{NamespaceMapper, StructureConfiguration, StructureConfigurationBuilder};
