use artifex_domain::{ArtifactsConfiguration, BoundedContextConfiguration, Topology};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// Directory holding the documents the pipeline owns.
pub const STATE_DIR: &str = ".artifex";
pub const BOUNDED_CONTEXT_FILE: &str = "bounded-context.json";
pub const TOPOLOGY_FILE: &str = "topology.json";
pub const ARTIFACTS_FILE: &str = "artifacts.json";

/// The documents a [`crate::ConfigurationStore`] manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    BoundedContext,
    Topology,
    Artifacts,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BoundedContext => "bounded context configuration",
            Self::Topology => "topology",
            Self::Artifacts => "artifacts configuration",
        })
    }
}

/// A value persisted as one whole JSON file.
pub trait Document: Serialize + DeserializeOwned + Default {
    const KIND: DocumentKind;
}

impl Document for BoundedContextConfiguration {
    const KIND: DocumentKind = DocumentKind::BoundedContext;
}

impl Document for Topology {
    const KIND: DocumentKind = DocumentKind::Topology;
}

impl Document for ArtifactsConfiguration {
    const KIND: DocumentKind = DocumentKind::Artifacts;
}
