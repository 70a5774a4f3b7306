use artifex_domain::{
    ArtifactDefinition, ArtifactKind, ArtifactsConfiguration, BoundedContextConfiguration,
    Feature, FeatureDefinition, Topology, TypeDescriptor, TypeRef,
};
use std::collections::BTreeMap;

#[test]
fn artifacts_document_survives_json_round_trip() {
    let mut doc = ArtifactsConfiguration::new();
    let feature = Feature::new();
    let shape = BTreeMap::from([("Name".to_owned(), "string".to_owned())]);
    doc.insert(feature, ArtifactKind::ReadModel, ArtifactDefinition::new("Read.Carts.Cart, Shop", shape));

    let json = serde_json::to_string_pretty(&doc).expect("serialize");
    assert!(json.contains("\"readModels\""));
    assert!(json.contains("\"type\": \"Read.Carts.Cart, Shop\""));

    let back: ArtifactsConfiguration = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, doc);
}

#[test]
fn serialization_is_deterministic() {
    let mut topology = Topology::default();
    for name in ["Carts", "Billing", "Orders"] {
        topology.features.insert(Feature::new(), FeatureDefinition::new(name, vec![name.to_owned()]));
    }

    let first = serde_json::to_string(&topology).expect("serialize");
    let reloaded: Topology = serde_json::from_str(&first).expect("deserialize");
    assert_eq!(serde_json::to_string(&reloaded).expect("serialize"), first);
}

#[test]
fn bounded_context_fields_are_optional() {
    let config: BoundedContextConfiguration =
        serde_json::from_str(r#"{ "application": "Shop", "useModules": true }"#).expect("parse");

    assert_eq!(config.application, "Shop");
    assert!(config.use_modules);
    assert!(config.structure_formats.is_empty());
}

#[test]
fn manifest_type_entries_parse_with_tagged_type_refs() {
    let json = r#"{
        "name": "ItemAdded",
        "namespace": "Events.Carts",
        "contracts": ["Dolittle.Events.IEvent"],
        "properties": [
            { "name": "Cart", "type": { "kind": "identifier" } },
            { "name": "Lines", "type": { "kind": "sequence", "element": { "kind": "named", "path": "Events.Carts.Line" } } }
        ],
        "constructors": [ { "parameters": [] } ]
    }"#;

    let ty: TypeDescriptor = serde_json::from_str(json).expect("parse");
    assert_eq!(ty.properties.len(), 2);
    assert_eq!(ty.properties[1].ty.element(), &TypeRef::named("Events.Carts.Line"));
    assert!(ty.is_concrete());
    assert!(ty.module.is_empty());
}
