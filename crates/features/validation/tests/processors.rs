use artifex_domain::{EventProcessorDescriptor, TypeDescriptor};
use artifex_validation::{ValidationError, validate_event_processors};
use uuid::Uuid;

fn processor_type(name: &str, processors: &[(&str, Uuid)]) -> TypeDescriptor {
    TypeDescriptor {
        name: name.to_owned(),
        namespace: "Read.Carts".to_owned(),
        event_processors: processors
            .iter()
            .map(|(method, id)| EventProcessorDescriptor { method: (*method).to_owned(), id: *id })
            .collect(),
        ..TypeDescriptor::default()
    }
}

#[test]
fn unique_ids_pass() {
    let types = vec![
        processor_type("CartProjection", &[("Process", Uuid::new_v4())]),
        processor_type("Inventory", &[("Process", Uuid::new_v4()), ("Restock", Uuid::new_v4())]),
    ];

    validate_event_processors(&types).expect("unique");
}

#[test]
fn empty_id_is_rejected() {
    let types = vec![processor_type("CartProjection", &[("Process", Uuid::nil())])];

    let err = validate_event_processors(&types).expect_err("empty id");
    let ValidationError::InvalidEventProcessor { method, .. } = err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(method.to_string(), "Read.Carts.CartProjection.Process");
}

#[test]
fn duplicate_ids_list_every_method() {
    let shared = Uuid::new_v4();
    let types = vec![
        processor_type("CartProjection", &[("Process", shared)]),
        processor_type("Inventory", &[("Process", Uuid::new_v4()), ("Restock", shared)]),
    ];

    let err = validate_event_processors(&types).expect_err("duplicate");
    assert_eq!(err.code(), "DuplicateEventProcessor");
    assert_eq!(
        err.to_string(),
        format!(
            "Duplicate event processor ids: {shared} [Read.Carts.CartProjection.Process, Read.Carts.Inventory.Restock]"
        )
    );
    let ValidationError::DuplicateEventProcessor { duplicates, .. } = err else {
        unreachable!();
    };
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].0, shared);
    let methods: Vec<_> = duplicates[0].1.iter().map(ToString::to_string).collect();
    assert_eq!(methods, vec!["Read.Carts.CartProjection.Process", "Read.Carts.Inventory.Restock"]);
}
