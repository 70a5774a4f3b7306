//! Proxy generation: client-side JavaScript counterparts of commands, queries and read models.
//!
//! Templates are embedded in the binary and rendered with `handlebars` in strict mode, so a
//! missing field is an error rather than an empty string.

mod context;
mod error;
mod generator;

pub use context::default_literal;
pub use error::{ProxyError, ProxyErrorExt};
pub use generator::{ProxyGenerator, write_proxies};
