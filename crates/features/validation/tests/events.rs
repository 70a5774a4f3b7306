use artifex_domain::constants::{CONCEPT_CONTRACT, EVENT_CONTRACT};
use artifex_domain::{
    ConstructorDescriptor, ParameterDescriptor, Primitive, PropertyDescriptor, TypeDescriptor,
    TypeRef,
};
use artifex_kernel::TypeCatalog;
use artifex_validation::{EventValidator, ValidationError, ViolationReason};

const MODULE: &str = "Shop.Events";

fn string() -> TypeRef {
    TypeRef::Primitive { name: Primitive::String }
}

fn property(name: &str, ty: TypeRef) -> PropertyDescriptor {
    PropertyDescriptor { name: name.to_owned(), ty, settable: false }
}

/// A type whose widest constructor takes one camelCase parameter per property.
fn complex(name: &str, namespace: &str, properties: Vec<PropertyDescriptor>) -> TypeDescriptor {
    let parameters = properties
        .iter()
        .map(|p| ParameterDescriptor { name: camel(&p.name), ty: p.ty.clone() })
        .collect();
    TypeDescriptor {
        name: name.to_owned(),
        namespace: namespace.to_owned(),
        module: MODULE.to_owned(),
        properties,
        constructors: vec![ConstructorDescriptor::default(), ConstructorDescriptor { parameters }],
        ..TypeDescriptor::default()
    }
}

fn event(name: &str, properties: Vec<PropertyDescriptor>) -> TypeDescriptor {
    let mut ty = complex(name, "Events.Carts", properties);
    ty.contracts.push(EVENT_CONTRACT.to_owned());
    ty
}

fn camel(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map(|c| c.to_lowercase().chain(chars).collect()).unwrap_or_default()
}

fn validate(events: &[&TypeDescriptor], all: &[TypeDescriptor]) -> Result<(), ValidationError> {
    let catalog = TypeCatalog::new(all);
    EventValidator::new(&catalog).validate(events)
}

fn reasons(err: ValidationError) -> Vec<(String, Option<String>, ViolationReason)> {
    let ValidationError::InvalidEvent { violations, .. } = err else {
        panic!("unexpected error: {err}");
    };
    violations.into_iter().map(|v| (v.event, v.property, v.reason)).collect()
}

#[test]
fn well_formed_events_pass() {
    let line = complex("Line", "Events.Carts", vec![property("Sku", string())]);
    let added = event(
        "ItemAdded",
        vec![
            property("Cart", TypeRef::Identifier),
            property("Lines", TypeRef::sequence(TypeRef::named("Events.Carts.Line"))),
        ],
    );
    let all = vec![line, added.clone()];

    validate(&[&added], &all).expect("valid");
}

#[test]
fn settable_property_without_custom_constructor_is_rejected() {
    let mut added = event("ItemAdded", vec![]);
    added.properties.push(PropertyDescriptor { name: "Sku".to_owned(), ty: string(), settable: true });
    added.constructors.clear();
    let all = vec![added.clone()];

    let violations = reasons(validate(&[&added], &all).expect_err("mutable"));
    assert_eq!(violations, vec![("Events.Carts.ItemAdded".to_owned(), None, ViolationReason::Mutable)]);
}

#[test]
fn property_without_matching_parameter_is_listed() {
    let mut added = event("ItemAdded", vec![property("Sku", string()), property("Count", string())]);
    added.constructors[1].parameters[1].name = "amount".to_owned();
    let all = vec![added.clone()];

    let violations = reasons(validate(&[&added], &all).expect_err("mismatch"));
    assert_eq!(
        violations,
        vec![(
            "Events.Carts.ItemAdded".to_owned(),
            Some("Count".to_owned()),
            ViolationReason::ParameterMismatch { expected: "count".to_owned() },
        )]
    );
}

#[test]
fn constructor_failures_are_batched_across_events() {
    let mut first = event("ItemAdded", vec![property("Sku", string())]);
    first.constructors.truncate(1);
    let mut second = event("ItemRemoved", vec![property("Sku", string())]);
    second.constructors[1].parameters[0].name = "code".to_owned();
    let all = vec![first.clone(), second.clone()];

    let violations = reasons(validate(&[&first, &second], &all).expect_err("batched"));
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].2, ViolationReason::MissingConstructor);
    assert!(matches!(violations[1].2, ViolationReason::ParameterMismatch { .. }));
}

#[test]
fn mutable_events_are_batched() {
    let mut added = event("ItemAdded", vec![property("Sku", string())]);
    added.properties[0].settable = true;
    let mut removed = event("ItemRemoved", vec![property("Sku", string())]);
    removed.properties[0].settable = true;
    let all = vec![added.clone(), removed.clone()];

    let violations = reasons(validate(&[&added, &removed], &all).expect_err("mutable"));
    assert_eq!(
        violations,
        vec![
            ("Events.Carts.ItemAdded".to_owned(), None, ViolationReason::Mutable),
            ("Events.Carts.ItemRemoved".to_owned(), None, ViolationReason::Mutable),
        ]
    );
}

#[test]
fn valid_nested_type_keeps_content_violations_batched() {
    let line = complex("Line", "Events.Carts", vec![property("Sku", string())]);
    let created = event("CartCreated", vec![]);
    let added = event(
        "ItemAdded",
        vec![
            property("Note", TypeRef::nullable(string())),
            property("Line", TypeRef::named("Events.Carts.Line")),
            property("Origin", TypeRef::named("Events.Carts.CartCreated")),
        ],
    );
    let removed = event("ItemRemoved", vec![property("Note", TypeRef::nullable(string()))]);
    let all = vec![line, created, added.clone(), removed.clone()];

    let violations = reasons(validate(&[&added, &removed], &all).expect_err("content"));
    assert_eq!(
        violations,
        vec![
            ("Events.Carts.ItemAdded".to_owned(), Some("Note".to_owned()), ViolationReason::Nullable),
            ("Events.Carts.ItemAdded".to_owned(), Some("Origin".to_owned()), ViolationReason::NestedEvent),
            ("Events.Carts.ItemRemoved".to_owned(), Some("Note".to_owned()), ViolationReason::Nullable),
        ]
    );
}

#[test]
fn forbidden_content_is_reported_per_property() {
    let mut cart_id = complex("CartId", "Concepts.Carts", vec![]);
    cart_id.contracts.push(CONCEPT_CONTRACT.to_owned());
    let other = event("CartCreated", vec![]);
    let mut foreign = complex("Money", "Shared", vec![]);
    foreign.module = "Shop.Shared".to_owned();

    let added = event(
        "ItemAdded",
        vec![
            property("Note", TypeRef::nullable(string())),
            property("Cart", TypeRef::named("Concepts.Carts.CartId")),
            property("Origin", TypeRef::named("Events.Carts.CartCreated")),
            property("Price", TypeRef::named("Shared.Money")),
            property("Ghost", TypeRef::named("Nowhere.Ghost")),
        ],
    );
    let all = vec![cart_id, other, foreign, added.clone()];

    let violations = reasons(validate(&[&added], &all).expect_err("content"));
    let found: Vec<_> = violations.into_iter().map(|(_, property, reason)| (property, reason)).collect();
    assert_eq!(
        found,
        vec![
            (Some("Note".to_owned()), ViolationReason::Nullable),
            (Some("Cart".to_owned()), ViolationReason::Concept),
            (Some("Origin".to_owned()), ViolationReason::NestedEvent),
            (Some("Price".to_owned()), ViolationReason::ForeignType { module: "Shop.Shared".to_owned() }),
            (Some("Ghost".to_owned()), ViolationReason::UnknownType { path: "Nowhere.Ghost".to_owned() }),
        ]
    );
}

#[test]
fn nested_complex_types_are_validated_as_events() {
    let mut line = complex("Line", "Events.Carts", vec![property("Sku", string())]);
    line.properties[0].settable = true;
    let added = event("ItemAdded", vec![property("Line", TypeRef::named("Events.Carts.Line"))]);
    let all = vec![line, added.clone()];

    let violations = reasons(validate(&[&added], &all).expect_err("nested"));
    assert_eq!(violations, vec![("Events.Carts.Line".to_owned(), None, ViolationReason::Mutable)]);
}

#[test]
fn nesting_beyond_depth_three_is_rejected() {
    let leaf = complex("Leaf", "Events.Deep", vec![property("Value", string())]);
    let third = complex("Third", "Events.Deep", vec![property("Leaf", TypeRef::named("Events.Deep.Leaf"))]);
    let second =
        complex("Second", "Events.Deep", vec![property("Third", TypeRef::named("Events.Deep.Third"))]);
    let deep = event("DeepEvent", vec![property("Second", TypeRef::named("Events.Deep.Second"))]);
    let all = vec![leaf, third, second, deep.clone()];

    let violations = reasons(validate(&[&deep], &all).expect_err("too deep"));
    assert_eq!(
        violations,
        vec![("Events.Deep.Leaf".to_owned(), None, ViolationReason::DepthExceeded { depth: 3 })]
    );
}

#[test]
fn two_levels_of_nesting_are_accepted() {
    let third = complex("Third", "Events.Deep", vec![property("Value", string())]);
    let second =
        complex("Second", "Events.Deep", vec![property("Third", TypeRef::named("Events.Deep.Third"))]);
    let shallow = event("ShallowEvent", vec![property("Second", TypeRef::named("Events.Deep.Second"))]);
    let all = vec![third, second, shallow.clone()];

    validate(&[&shallow], &all).expect("depth two is fine");
}
