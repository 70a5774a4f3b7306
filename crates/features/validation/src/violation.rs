use std::fmt;

/// Why an event, or one of its properties, was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationReason {
    /// The type has a settable property.
    Mutable,
    /// The type has properties but only a default constructor.
    MissingConstructor,
    /// No parameter of the widest constructor is named after the property.
    ParameterMismatch { expected: String },
    Nullable,
    /// Only one level of sequence is unwrapped.
    NestedSequence,
    /// The property holds another event.
    NestedEvent,
    /// The property holds a concept.
    Concept,
    /// The property type is declared in another module.
    ForeignType { module: String },
    /// The property type is not exported by any loaded module.
    UnknownType { path: String },
    /// Nested complex types go deeper than the supported depth.
    DepthExceeded { depth: u8 },
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mutable => f.write_str("is not immutable"),
            Self::MissingConstructor => {
                f.write_str("has properties, but does not have a custom constructor")
            },
            Self::ParameterMismatch { expected } => {
                write!(f, "expected a constructor parameter named '{expected}'")
            },
            Self::Nullable => f.write_str("cannot be nullable"),
            Self::NestedSequence => f.write_str("cannot contain nested sequences"),
            Self::NestedEvent => f.write_str("cannot contain another event"),
            Self::Concept => f.write_str("cannot contain a concept"),
            Self::ForeignType { module } => {
                write!(f, "cannot contain a complex type from module '{module}'")
            },
            Self::UnknownType { path } => write!(f, "refers to unknown type '{path}'"),
            Self::DepthExceeded { depth } => {
                write!(f, "reached nesting depth {depth}, complex types are too deep")
            },
        }
    }
}

/// One rejected event or event property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventViolation {
    /// Full name of the offending type.
    pub event: String,
    pub property: Option<String>,
    pub reason: ViolationReason,
}

impl fmt::Display for EventViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.property {
            Some(property) => write!(f, "'{}.{property}' {}", self.event, self.reason),
            None => write!(f, "'{}' {}", self.event, self.reason),
        }
    }
}

/// Violations collected by one validation pass.
#[derive(Debug, Default)]
pub struct Violations(Vec<EventViolation>);

impl Violations {
    pub fn push(&mut self, event: &str, property: Option<&str>, reason: ViolationReason) {
        self.0.push(EventViolation {
            event: event.to_owned(),
            property: property.map(ToOwned::to_owned),
            reason,
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Moves the collected violations out, leaving the collector empty.
    pub fn take(&mut self) -> Vec<EventViolation> {
        std::mem::take(&mut self.0)
    }
}

/// An event processor method, named by its declaring type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorMethod {
    pub declaring_type: String,
    pub method: String,
}

impl fmt::Display for ProcessorMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring_type, self.method)
    }
}
