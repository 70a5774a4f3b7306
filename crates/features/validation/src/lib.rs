//! Structural validation of event artifacts and event processors.
//!
//! Events must be immutable, constructible from their properties and self-contained.
//! Event processors must have unique ids.

mod error;
mod events;
mod processors;
mod violation;

pub use error::{ValidationError, ValidationErrorExt};
pub use events::{EventValidator, MAX_DEPTH};
pub use processors::validate_event_processors;
pub use violation::{EventViolation, ProcessorMethod, ViolationReason, Violations};
