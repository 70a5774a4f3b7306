use crate::error::ValidationError;
use crate::violation::{ViolationReason, Violations};
use artifex_domain::constants::{CONCEPT_CONTRACT, EVENT_CONTRACT};
use artifex_domain::{TypeDescriptor, TypeRef};
use artifex_kernel::TypeCatalog;
use artifex_kernel::naming::camel_case;
use tracing::{error, info, warn};

/// Nesting depth at which complex types on events are rejected.
pub const MAX_DEPTH: u8 = 3;

/// Structural checks on event artifacts.
///
/// Three checks run per nesting level, in order: immutability, constructor shape and content.
/// Each check examines every type of the level and fails once when it recorded violations of
/// its own. Violations recorded earlier by an enclosing level stay pending until that level's
/// check raises.
/// Complex property types declared in the event's own module are validated as events one
/// level deeper.
#[derive(Debug)]
pub struct EventValidator<'a> {
    catalog: &'a TypeCatalog<'a>,
    event_contract: String,
    concept_contract: String,
}

impl<'a> EventValidator<'a> {
    #[must_use]
    pub fn new(catalog: &'a TypeCatalog<'a>) -> Self {
        Self {
            catalog,
            event_contract: EVENT_CONTRACT.to_owned(),
            concept_contract: CONCEPT_CONTRACT.to_owned(),
        }
    }

    #[must_use]
    pub fn event_contract(mut self, contract: impl Into<String>) -> Self {
        self.event_contract = contract.into();
        self
    }

    #[must_use]
    pub fn concept_contract(mut self, contract: impl Into<String>) -> Self {
        self.concept_contract = contract.into();
        self
    }

    pub fn validate(&self, events: &[&TypeDescriptor]) -> Result<(), ValidationError> {
        let mut violations = Violations::default();
        self.validate_level(events, 0, &mut violations)?;
        info!(count = events.len(), "Validated events");
        Ok(())
    }

    fn validate_level(
        &self,
        types: &[&TypeDescriptor],
        depth: u8,
        violations: &mut Violations,
    ) -> Result<(), ValidationError> {
        if depth >= MAX_DEPTH {
            error!(depth, "Event validation reached a too deep level. Be aware of complex types on events");
            for ty in types {
                violations.push(&ty.full_name(), None, ViolationReason::DepthExceeded { depth });
            }
            return raise(violations);
        }

        check_immutability(types, violations)?;
        check_constructors(types, violations)?;
        self.check_content(types, depth, violations)
    }

    fn check_content(
        &self,
        types: &[&TypeDescriptor],
        depth: u8,
        violations: &mut Violations,
    ) -> Result<(), ValidationError> {
        let start = violations.len();
        for ty in types {
            for property in &ty.properties {
                let reason = match property.ty.element() {
                    TypeRef::Primitive { .. } | TypeRef::Identifier => None,
                    TypeRef::Nullable { .. } => Some(ViolationReason::Nullable),
                    TypeRef::Sequence { .. } => Some(ViolationReason::NestedSequence),
                    TypeRef::Named { path } => self.check_named(ty, path, depth, violations)?,
                };
                if let Some(reason) = reason {
                    violations.push(&ty.full_name(), Some(&property.name), reason);
                }
            }
        }
        if violations.len() == start {
            return Ok(());
        }
        error!(
            "Discovered events with invalid content. Events cannot contain nullable types, concepts, other events or complex types from other modules"
        );
        raise(violations)
    }

    /// Returns the violation of a named property type, recursing into same-module types.
    fn check_named(
        &self,
        owner: &TypeDescriptor,
        path: &str,
        depth: u8,
        violations: &mut Violations,
    ) -> Result<Option<ViolationReason>, ValidationError> {
        if self.catalog.is_assignable_to(path, &self.event_contract) {
            return Ok(Some(ViolationReason::NestedEvent));
        }
        if self.catalog.is_assignable_to(path, &self.concept_contract) {
            return Ok(Some(ViolationReason::Concept));
        }
        let Some(nested) = self.catalog.get(path) else {
            return Ok(Some(ViolationReason::UnknownType { path: path.to_owned() }));
        };
        if nested.module != owner.module {
            return Ok(Some(ViolationReason::ForeignType { module: nested.module.clone() }));
        }

        self.validate_level(&[nested], depth + 1, violations)?;
        Ok(None)
    }
}

fn check_immutability(
    types: &[&TypeDescriptor],
    violations: &mut Violations,
) -> Result<(), ValidationError> {
    let start = violations.len();
    for ty in types.iter().filter(|ty| ty.settable_properties().next().is_some()) {
        violations.push(&ty.full_name(), None, ViolationReason::Mutable);
    }
    if violations.len() == start {
        return Ok(());
    }
    warn!("Discovered mutable events. An event should not have any settable properties");
    raise(violations)
}

fn check_constructors(
    types: &[&TypeDescriptor],
    violations: &mut Violations,
) -> Result<(), ValidationError> {
    let start = violations.len();
    for ty in types {
        if ty.properties.is_empty() {
            continue;
        }
        let Some(constructor) = ty.widest_constructor() else {
            violations.push(&ty.full_name(), None, ViolationReason::MissingConstructor);
            continue;
        };
        for property in &ty.properties {
            let expected = camel_case(&property.name);
            if !constructor.parameters.iter().any(|p| p.name == expected) {
                violations.push(
                    &ty.full_name(),
                    Some(&property.name),
                    ViolationReason::ParameterMismatch { expected },
                );
            }
        }
    }
    if violations.len() == start {
        return Ok(());
    }
    error!(
        "Discovered events with incorrect constructors. Constructor parameter names should be camelCase and match the PascalCase property they set"
    );
    raise(violations)
}

fn raise(violations: &mut Violations) -> Result<(), ValidationError> {
    let violations = violations.take();
    for violation in &violations {
        error!("The event {violation}");
    }
    Err(ValidationError::InvalidEvent { violations, context: None })
}
