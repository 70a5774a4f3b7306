/// Separator used by namespaces and fully-qualified type names.
pub const NAMESPACE_SEPARATOR: char = '.';

/// Default capability contracts of the artifact categories.
pub const COMMAND_CONTRACT: &str = "Dolittle.Commands.ICommand";
pub const EVENT_CONTRACT: &str = "Dolittle.Events.IEvent";
pub const QUERY_CONTRACT: &str = "Dolittle.Queries.IQuery";
pub const READ_MODEL_CONTRACT: &str = "Dolittle.ReadModels.IReadModel";
pub const EVENT_SOURCE_CONTRACT: &str = "Dolittle.Events.IEventSource";

/// Base type of value wrappers that must never appear on events.
pub const CONCEPT_CONTRACT: &str = "Dolittle.Concepts.ConceptAs";
