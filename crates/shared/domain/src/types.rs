//! Type metadata of a compiled module, as described by its module manifest.

use crate::artifacts::ArtifactKind;
use crate::constants::NAMESPACE_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use uuid::Uuid;

/// Built-in value types that need no further structural validation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Primitive {
    String,
    Char,
    Bool,
    Byte,
    Int,
    Long,
    Float,
    Double,
    Decimal,
    DateTime,
    Duration,
}

impl Primitive {
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::Int | Self::Long | Self::Float | Self::Double | Self::Decimal
        )
    }
}

/// Reference to the declared type of a property or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TypeRef {
    Primitive { name: Primitive },
    /// A GUID-like identifier.
    Identifier,
    Nullable { inner: Box<TypeRef> },
    Sequence { element: Box<TypeRef> },
    /// Any other type, by fully-qualified name.
    Named { path: String },
}

impl TypeRef {
    #[must_use]
    pub fn named(path: impl Into<String>) -> Self {
        Self::Named { path: path.into() }
    }

    #[must_use]
    pub fn sequence(element: Self) -> Self {
        Self::Sequence { element: Box::new(element) }
    }

    #[must_use]
    pub fn nullable(inner: Self) -> Self {
        Self::Nullable { inner: Box::new(inner) }
    }

    /// Unwraps exactly one level of sequence.
    #[must_use]
    pub fn element(&self) -> &Self {
        match self {
            Self::Sequence { element } => element,
            other => other,
        }
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable { .. })
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive { name } => write!(f, "{name}"),
            Self::Identifier => f.write_str("identifier"),
            Self::Nullable { inner } => write!(f, "{inner}?"),
            Self::Sequence { element } => write!(f, "[{element}]"),
            Self::Named { path } => f.write_str(path),
        }
    }
}

/// A public instance property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub settable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// A public constructor. No parameters means the default constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDescriptor {
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

impl ConstructorDescriptor {
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// A method handling events, identified by a stable id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventProcessorDescriptor {
    pub method: String,
    pub id: Uuid,
}

/// An exported type of a compiled module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    /// Owning module; filled in from the manifest when omitted.
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_open_generic: bool,
    /// Every interface or base type this type is assignable to.
    #[serde(default)]
    pub contracts: Vec<String>,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    #[serde(default)]
    pub constructors: Vec<ConstructorDescriptor>,
    #[serde(default)]
    pub event_processors: Vec<EventProcessorDescriptor>,
}

impl TypeDescriptor {
    /// `Namespace.Name`, or just the name for types outside any namespace.
    #[must_use]
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}{NAMESPACE_SEPARATOR}{}", self.namespace, self.name)
        }
    }

    /// Module-qualified name used to match persisted artifact definitions.
    #[must_use]
    pub fn type_reference(&self) -> String {
        format!("{}, {}", self.full_name(), self.module)
    }

    #[must_use]
    pub fn namespace_segments(&self) -> Vec<&str> {
        self.namespace.split(NAMESPACE_SEPARATOR).filter(|s| !s.is_empty()).collect()
    }

    /// Capability check: the type is, or is assignable to, `contract`.
    #[must_use]
    pub fn is_assignable_to(&self, contract: &str) -> bool {
        self.full_name() == contract || self.contracts.iter().any(|c| c == contract)
    }

    #[must_use]
    pub const fn is_concrete(&self) -> bool {
        !self.is_abstract && !self.is_open_generic
    }

    /// The public constructor with the greatest parameter count, ignoring the default one.
    #[must_use]
    pub fn widest_constructor(&self) -> Option<&ConstructorDescriptor> {
        self.constructors
            .iter()
            .filter(|c| !c.is_default())
            .max_by_key(|c| c.parameters.len())
    }

    /// Order-independent structural fingerprint: property name to declared type.
    #[must_use]
    pub fn shape(&self) -> BTreeMap<String, String> {
        self.properties.iter().map(|p| (p.name.clone(), p.ty.to_string())).collect()
    }

    pub fn settable_properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.iter().filter(|p| p.settable)
    }
}

/// A classified type, annotated with its first matching artifact category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    pub kind: ArtifactKind,
    pub ty: TypeDescriptor,
}

impl ArtifactDescriptor {
    #[must_use]
    pub const fn new(kind: ArtifactKind, ty: TypeDescriptor) -> Self {
        Self { kind, ty }
    }
}

impl Deref for ArtifactDescriptor {
    type Target = TypeDescriptor;

    fn deref(&self) -> &Self::Target {
        &self.ty
    }
}
