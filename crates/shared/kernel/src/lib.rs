//! Kernel utilities shared across pipeline stages.
//! Keep this crate lightweight: it reads module manifests, indexes their types, loads build
//! settings and hosts the naming helpers every stage agrees on.
//!
//! ## Reading a module
//! ```rust,no_run
//! use artifex_kernel::{ManifestProvider, TypeMetadataProvider};
//!
//! let provider = ManifestProvider::open("target/Shop.Domain.manifest.json").unwrap();
//! let types = provider.exported_types().unwrap();
//! println!("{} exports {} types", provider.module_name(), types.len());
//! ```
//!
//! ## Settings
//! ```rust,no_run
//! use artifex_kernel::settings::load_settings;
//!
//! let settings = load_settings(None).unwrap_or_default();
//! assert!(settings.namespace_segments_to_strip.is_empty());
//! ```
mod catalog;
mod error;
mod manifest;
pub mod naming;
pub mod settings;

pub use artifex_domain as domain;
pub use catalog::TypeCatalog;
pub use error::{KernelError, KernelErrorExt};
pub use manifest::{InMemoryProvider, ManifestProvider, ModuleManifest, TypeMetadataProvider};
pub use settings::BuildSettings;
