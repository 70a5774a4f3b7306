//! # Domain Models
//!
//! Pure value objects shared by every pipeline stage. Dependencies are limited to `serde`,
//! `uuid` and `strum`. Keep it lean: no I/O and no pipeline logic, just data and helpers.
//!
//! All persisted documents use `BTreeMap` so that saving the same model twice produces
//! byte-identical files.

pub mod artifacts;
pub mod config;
pub mod constants;
pub mod ids;
pub mod proxy;
pub mod topology;
pub mod types;

pub use artifacts::{
    ArtifactDefinition, ArtifactKind, ArtifactLocation, ArtifactTypeDescriptor, ArtifactTypes,
    ArtifactsByKind, ArtifactsConfiguration, Definitions, Generation,
};
pub use config::BoundedContextConfiguration;
pub use ids::{ArtifactId, Feature, Module};
pub use proxy::Proxy;
pub use topology::{FeatureDefinition, ModuleDefinition, Topology};
pub use types::{
    ArtifactDescriptor, ConstructorDescriptor, EventProcessorDescriptor, ParameterDescriptor,
    Primitive, PropertyDescriptor, TypeDescriptor, TypeRef,
};
