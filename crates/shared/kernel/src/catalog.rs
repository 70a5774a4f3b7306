use artifex_domain::TypeDescriptor;
use fxhash::FxHashMap;

/// Index of type descriptors by fully-qualified name.
#[derive(Debug, Default)]
pub struct TypeCatalog<'a> {
    by_name: FxHashMap<String, &'a TypeDescriptor>,
}

impl<'a> TypeCatalog<'a> {
    #[must_use]
    pub fn new(types: &'a [TypeDescriptor]) -> Self {
        Self { by_name: types.iter().map(|ty| (ty.full_name(), ty)).collect() }
    }

    #[must_use]
    pub fn get(&self, full_name: &str) -> Option<&'a TypeDescriptor> {
        self.by_name.get(full_name).copied()
    }

    /// Whether the named type is known and assignable to `contract`.
    #[must_use]
    pub fn is_assignable_to(&self, full_name: &str, contract: &str) -> bool {
        full_name == contract || self.get(full_name).is_some_and(|ty| ty.is_assignable_to(contract))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(name: &str, namespace: &str, contracts: &[&str]) -> TypeDescriptor {
        TypeDescriptor {
            name: name.to_owned(),
            namespace: namespace.to_owned(),
            contracts: contracts.iter().map(|c| (*c).to_owned()).collect(),
            ..TypeDescriptor::default()
        }
    }

    #[test]
    fn lookups_use_full_names() {
        let types = vec![
            ty("CartId", "Concepts.Carts", &["Dolittle.Concepts.ConceptAs"]),
            ty("Line", "Events.Carts", &[]),
        ];
        let catalog = TypeCatalog::new(&types);

        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("Events.Carts.Line").is_some());
        assert!(catalog.get("Line").is_none());
        assert!(catalog.is_assignable_to("Concepts.Carts.CartId", "Dolittle.Concepts.ConceptAs"));
        assert!(!catalog.is_assignable_to("Unknown.Type", "Dolittle.Concepts.ConceptAs"));
    }
}
