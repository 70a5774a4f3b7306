use artifex_domain::{PropertyDescriptor, TypeRef};
use artifex_kernel::naming::camel_case;
use serde::Serialize;

const EMPTY_ID: &str = "'00000000-0000-0000-0000-000000000000'";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProxyProperty {
    pub(crate) name: String,
    pub(crate) default_value: &'static str,
}

impl From<&PropertyDescriptor> for ProxyProperty {
    fn from(property: &PropertyDescriptor) -> Self {
        Self { name: camel_case(&property.name), default_value: default_literal(&property.ty) }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommandContext {
    pub(crate) name: String,
    pub(crate) artifact_id: String,
    pub(crate) properties: Vec<ProxyProperty>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QueryContext {
    pub(crate) name: String,
    pub(crate) clr_type: String,
    pub(crate) properties: Vec<ProxyProperty>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReadModelContext {
    pub(crate) name: String,
    pub(crate) artifact_id: String,
    pub(crate) generation: String,
    pub(crate) properties: Vec<ProxyProperty>,
}

/// JavaScript literal a proxy property starts out with.
#[must_use]
pub fn default_literal(ty: &TypeRef) -> &'static str {
    use artifex_domain::Primitive;

    match ty {
        TypeRef::Primitive { name: Primitive::String | Primitive::Char } => "''",
        TypeRef::Primitive { name: Primitive::Bool } => "false",
        TypeRef::Primitive { name: Primitive::DateTime } => "new Date()",
        TypeRef::Primitive { name } if name.is_numeric() => "0",
        TypeRef::Identifier => EMPTY_ID,
        TypeRef::Sequence { .. } => "[]",
        TypeRef::Nullable { .. } => "null",
        TypeRef::Primitive { .. } | TypeRef::Named { .. } => "{}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artifex_domain::Primitive;

    #[test]
    fn literals_follow_the_declared_type() {
        let cases = [
            (TypeRef::Primitive { name: Primitive::String }, "''"),
            (TypeRef::Primitive { name: Primitive::Char }, "''"),
            (TypeRef::Primitive { name: Primitive::Bool }, "false"),
            (TypeRef::Primitive { name: Primitive::Decimal }, "0"),
            (TypeRef::Primitive { name: Primitive::Long }, "0"),
            (TypeRef::Primitive { name: Primitive::DateTime }, "new Date()"),
            (TypeRef::Identifier, EMPTY_ID),
            (TypeRef::sequence(TypeRef::Identifier), "[]"),
            (TypeRef::nullable(TypeRef::Primitive { name: Primitive::Int }), "null"),
            (TypeRef::named("Read.Carts.Line"), "{}"),
            (TypeRef::Primitive { name: Primitive::Duration }, "{}"),
        ];

        for (ty, expected) in cases {
            assert_eq!(default_literal(&ty), expected, "{ty}");
        }
    }

    #[test]
    fn property_names_are_camel_cased() {
        let property = PropertyDescriptor {
            name: "CartTotal".to_owned(),
            ty: TypeRef::Primitive { name: Primitive::Double },
            settable: true,
        };
        let proxy = ProxyProperty::from(&property);

        assert_eq!(proxy.name, "cartTotal");
        assert_eq!(proxy.default_value, "0");
    }
}
