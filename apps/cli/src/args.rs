//! Command-line arguments of the `artifex` build step.

use clap::Parser;
use std::path::PathBuf;

/// Discovers the artifacts of a compiled module and updates the bounded context documents.
#[derive(Debug, Parser)]
#[command(name = "artifex")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
pub(crate) struct Cli {
    /// Module manifest of the compiled module
    pub(crate) module: PathBuf,

    /// Project directory holding the bounded context configuration
    #[arg(long, default_value = ".", env = "ARTIFEX_ROOT")]
    pub(crate) root: PathBuf,

    /// Bounded context configuration, relative to the project directory
    #[arg(long, default_value = "bounded-context.json")]
    pub(crate) bounded_context: PathBuf,

    /// Write client proxies for commands, queries and read models
    #[arg(long)]
    pub(crate) generate_proxies: bool,

    /// Base directory of generated proxies
    #[arg(long)]
    pub(crate) proxies_path: Option<PathBuf>,

    /// Treat the first mapped namespace segment as a module
    #[arg(long)]
    pub(crate) use_modules: bool,

    /// Namespace prefix to remove before mapping (repeatable)
    #[arg(short, long = "strip", value_name = "PREFIX")]
    pub(crate) strip: Vec<String>,

    /// Settings file (defaults to `artifex.toml` when present)
    #[arg(long)]
    pub(crate) settings: Option<PathBuf>,

    /// Log every classified artifact and reused identifier
    #[arg(short, long)]
    pub(crate) verbose: bool,
}
