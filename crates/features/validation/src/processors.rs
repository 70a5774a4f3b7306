use crate::error::ValidationError;
use crate::violation::ProcessorMethod;
use artifex_domain::TypeDescriptor;
use std::collections::BTreeMap;
use tracing::{error, info};
use uuid::Uuid;

/// Checks that every event processor method carries a unique, non-empty id.
///
/// Processors are collected from every exported type, artifact or not.
pub fn validate_event_processors(types: &[TypeDescriptor]) -> Result<(), ValidationError> {
    let mut by_id: BTreeMap<Uuid, Vec<ProcessorMethod>> = BTreeMap::new();
    let mut order = Vec::new();

    for ty in types {
        for processor in &ty.event_processors {
            let method = ProcessorMethod {
                declaring_type: ty.full_name(),
                method: processor.method.clone(),
            };
            if processor.id.is_nil() {
                error!(method = %method, "Found an event processor with empty id");
                return Err(ValidationError::InvalidEventProcessor { method, context: None });
            }
            let methods = by_id.entry(processor.id).or_default();
            if methods.is_empty() {
                order.push(processor.id);
            }
            methods.push(method);
        }
    }

    let processors = by_id.values().map(Vec::len).sum::<usize>();
    let duplicates: Vec<(Uuid, Vec<ProcessorMethod>)> = order
        .into_iter()
        .filter_map(|id| by_id.remove(&id).map(|methods| (id, methods)))
        .filter(|(_, methods)| methods.len() > 1)
        .collect();

    if duplicates.is_empty() {
        info!(count = processors, "Validated event processors");
        return Ok(());
    }

    for (id, methods) in &duplicates {
        error!(%id, "Found duplication of event processor id");
        for method in methods {
            error!(%id, method = %method.method, declaring_type = %method.declaring_type, "Duplicate event processor");
        }
    }
    Err(ValidationError::DuplicateEventProcessor { duplicates, context: None })
}
