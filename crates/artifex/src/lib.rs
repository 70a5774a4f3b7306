//! # Artifex
//!
//! Composition of the build pipeline stages behind one entry point.
//!
//! Keep this crate thin: it wires the stage crates together, it does not implement business
//! logic. Each stage is re-exported for callers that need finer control.
//!
//! ```rust,no_run
//! use artifex::{BuildOptions, Pipeline};
//! use artifex::kernel::ManifestProvider;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = ManifestProvider::open("target/Shop.Domain.module.json")?;
//! let report = Pipeline::new(&provider, BuildOptions::default()).run()?;
//! println!("{} artifacts in {} features", report.artifacts, report.features);
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod pipeline;

pub use artifex_artifacts as artifacts;
pub use artifex_discovery as discovery;
pub use artifex_domain as domain;
pub use artifex_kernel as kernel;
pub use artifex_proxies as proxies;
pub use artifex_store as store;
pub use artifex_topology as topology;
pub use artifex_validation as validation;

pub use context::{BuildOptions, PipelineContext};
pub use error::{BuildError, BuildErrorExt};
pub use pipeline::{BuildReport, Pipeline};
