use artifex_artifacts::ArtifactsError;
use artifex_discovery::DiscoveryError;
use artifex_kernel::KernelError;
use artifex_proxies::ProxyError;
use artifex_store::StoreError;
use artifex_topology::TopologyError;
use artifex_validation::ValidationError;
use std::borrow::Cow;

/// Any failure of a build run, by stage.
#[artifex_derive::artifex_error]
pub enum BuildError {
    #[error("{source}{}", format_context(.context))]
    Kernel { source: KernelError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Store { source: StoreError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Discovery { source: DiscoveryError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Topology { source: TopologyError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Artifacts { source: ArtifactsError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Validation { source: ValidationError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Proxy { source: ProxyError, context: Option<Cow<'static, str>> },

    #[error("Invalid build configuration{}: {message}", format_context(.context))]
    Configuration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl BuildError {
    /// Diagnostic code of the underlying stage error, e.g. `InvalidEvent`.
    #[must_use]
    pub const fn stage_code(&self) -> &'static str {
        match self {
            Self::Kernel { source, .. } => source.code(),
            Self::Store { source, .. } => source.code(),
            Self::Discovery { source, .. } => source.code(),
            Self::Topology { source, .. } => source.code(),
            Self::Artifacts { source, .. } => source.code(),
            Self::Validation { source, .. } => source.code(),
            Self::Proxy { source, .. } => source.code(),
            Self::Configuration { .. } => self.code(),
        }
    }
}
