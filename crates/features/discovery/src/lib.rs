//! Artifact discovery: the first stage of a build run.
//!
//! Every concrete exported type that satisfies one of the registered contracts becomes an
//! artifact of the first matching category, in registry order.

mod classifier;
mod error;

pub use classifier::ArtifactClassifier;
pub use error::{DiscoveryError, DiscoveryErrorExt};
