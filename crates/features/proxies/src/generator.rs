use crate::context::{CommandContext, ProxyProperty, QueryContext, ReadModelContext};
use crate::error::{ProxyError, ProxyErrorExt};
use artifex_domain::{
    ArtifactDefinition, ArtifactDescriptor, ArtifactKind, ArtifactsConfiguration, Proxy,
};
use artifex_kernel::naming::strip_namespace;
use handlebars::Handlebars;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

const COMMAND_TEMPLATE: &str = "command";
const QUERY_TEMPLATE: &str = "query";
const READ_MODEL_TEMPLATE: &str = "read_model";
const PROXY_EXTENSION: &str = "js";

/// Renders proxies for command, query and read model artifacts.
///
/// Rendering is pure; [`write_proxies`] puts the result on disk.
#[derive(Debug)]
pub struct ProxyGenerator {
    handlebars: Handlebars<'static>,
    base_path: PathBuf,
    strip: Vec<String>,
}

impl ProxyGenerator {
    /// Creates a generator writing below `base_path`, dropping `strip` prefixes from namespaces.
    pub fn new(base_path: impl Into<PathBuf>, strip: Vec<String>) -> Result<Self, ProxyError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, template) in [
            (COMMAND_TEMPLATE, include_str!("../templates/command.js.hbs")),
            (QUERY_TEMPLATE, include_str!("../templates/query.js.hbs")),
            (READ_MODEL_TEMPLATE, include_str!("../templates/read_model.js.hbs")),
        ] {
            handlebars.register_template_string(name, template).context(name)?;
        }

        Ok(Self { handlebars, base_path: base_path.into(), strip })
    }

    pub fn generate(
        &self,
        artifacts: &[ArtifactDescriptor],
        configuration: &ArtifactsConfiguration,
    ) -> Result<Vec<Proxy>, ProxyError> {
        let mut proxies = Vec::new();

        for kind in [ArtifactKind::Command, ArtifactKind::Query, ArtifactKind::ReadModel] {
            for artifact in artifacts.iter().filter(|a| a.kind == kind) {
                debug!(artifact = %artifact.full_name(), %kind, "Creating proxy");
                let content = self.render(artifact, configuration)?;
                proxies.push(Proxy { full_file_path: self.file_path(artifact), content });
            }
        }

        Ok(proxies)
    }

    fn render(
        &self,
        artifact: &ArtifactDescriptor,
        configuration: &ArtifactsConfiguration,
    ) -> Result<String, ProxyError> {
        let properties: Vec<ProxyProperty> =
            artifact.settable_properties().map(ProxyProperty::from).collect();
        let name = artifact.name.clone();

        let rendered = match artifact.kind {
            ArtifactKind::Command => {
                let definition = definition_of(artifact, configuration)?;
                let context =
                    CommandContext { name, artifact_id: definition.artifact.to_string(), properties };
                self.handlebars.render(COMMAND_TEMPLATE, &context)
            },
            ArtifactKind::Query => {
                let context = QueryContext { name, clr_type: artifact.full_name(), properties };
                self.handlebars.render(QUERY_TEMPLATE, &context)
            },
            ArtifactKind::ReadModel => {
                let definition = definition_of(artifact, configuration)?;
                let context = ReadModelContext {
                    name,
                    artifact_id: definition.artifact.to_string(),
                    generation: definition.generation.to_string(),
                    properties,
                };
                self.handlebars.render(READ_MODEL_TEMPLATE, &context)
            },
            ArtifactKind::Event | ArtifactKind::EventSource => return Ok(String::new()),
        };

        rendered.context(artifact.full_name())
    }

    /// `<base>/<namespace without stripped prefix, as directories>/<Name>.js`
    #[must_use]
    pub fn file_path(&self, artifact: &ArtifactDescriptor) -> PathBuf {
        let mut path = self.base_path.clone();
        path.extend(strip_namespace(&artifact.namespace, &self.strip));
        path.push(format!("{}.{PROXY_EXTENSION}", artifact.name));
        path
    }
}

fn definition_of<'a>(
    artifact: &ArtifactDescriptor,
    configuration: &'a ArtifactsConfiguration,
) -> Result<&'a ArtifactDefinition, ProxyError> {
    let type_ref = artifact.type_reference();
    configuration
        .find_by_type_reference(&type_ref)
        .map(|(_, definition)| definition)
        .ok_or_else(|| ProxyError::UnknownArtifact { artifact: type_ref.clone(), context: None })
}

/// Writes every proxy, creating directories and replacing existing files.
pub fn write_proxies(proxies: &[Proxy]) -> Result<(), ProxyError> {
    for proxy in proxies {
        if let Some(parent) = proxy.full_file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .context(format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&proxy.full_file_path, &proxy.content)
            .context(format!("Failed to write {}", proxy.full_file_path.display()))?;
    }

    info!(count = proxies.len(), "Wrote proxies");
    Ok(())
}
