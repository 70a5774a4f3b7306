use artifex_domain::{
    ArtifactDefinition, ArtifactKind, ArtifactsConfiguration, BoundedContextConfiguration,
    Feature, FeatureDefinition, Topology,
};
use artifex_store::{ConfigurationStore, DocumentKind, StoreError};
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

fn store(dir: &TempDir) -> ConfigurationStore {
    ConfigurationStore::builder().root(dir.path()).build().expect("store")
}

#[test]
fn missing_bounded_context_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let err = store(&dir).load::<BoundedContextConfiguration>().expect_err("missing");

    assert!(matches!(err, StoreError::MissingConfiguration { .. }));
    assert!(err.to_string().contains("bounded-context.json"));
}

#[test]
fn bounded_context_path_is_configurable() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir(dir.path().join("config")).expect("mkdir");
    fs::write(dir.path().join("config/context.json"), r#"{ "boundedContextName": "Carts" }"#)
        .expect("write");

    let store = ConfigurationStore::builder()
        .root(dir.path())
        .bounded_context("config/context.json")
        .build()
        .expect("store");
    let config: BoundedContextConfiguration = store.load().expect("load");

    assert_eq!(config.bounded_context_name, "Carts");
}

#[test]
fn bounded_context_path_cannot_escape_root() {
    let dir = TempDir::new().expect("tempdir");
    let err = ConfigurationStore::builder()
        .root(dir.path())
        .bounded_context("../elsewhere.json")
        .build()
        .expect_err("escape");

    assert_eq!(err.code(), "PathTraversalAttempt");
}

#[test]
fn generated_documents_default_when_absent() {
    let dir = TempDir::new().expect("tempdir");
    let store = store(&dir);

    let topology: Topology = store.load_or_default().expect("topology");
    let artifacts: ArtifactsConfiguration = store.load_or_default().expect("artifacts");

    assert!(topology.is_empty());
    assert!(artifacts.is_empty());
}

#[test]
fn save_then_load_returns_the_same_document() {
    let dir = TempDir::new().expect("tempdir");
    let store = store(&dir);

    let mut artifacts = ArtifactsConfiguration::new();
    artifacts.insert(
        Feature::new(),
        ArtifactKind::Command,
        ArtifactDefinition::new("Domain.Carts.AddItem, Shop.Domain", BTreeMap::new()),
    );
    let path = store.save(&artifacts).expect("save");

    assert_eq!(path, store.path_of(DocumentKind::Artifacts));
    assert!(path.ends_with(".artifex/artifacts.json"));
    assert_eq!(store.load::<ArtifactsConfiguration>().expect("load"), artifacts);
}

#[test]
fn save_replaces_the_whole_file() {
    let dir = TempDir::new().expect("tempdir");
    let store = store(&dir);

    let mut topology = Topology::default();
    topology.features.insert(Feature::new(), FeatureDefinition::new("Carts", vec![]));
    store.save(&topology).expect("first save");

    let smaller = Topology::default();
    store.save(&smaller).expect("second save");

    let on_disk = fs::read_to_string(store.path_of(DocumentKind::Topology)).expect("read");
    assert!(!on_disk.contains("Carts"));
    assert_eq!(store.load::<Topology>().expect("load"), smaller);
}

#[test]
fn malformed_documents_are_rejected() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("bounded-context.json"), "{ nope").expect("write");

    let err = store(&dir).load::<BoundedContextConfiguration>().expect_err("malformed");
    assert_eq!(err.code(), "Json");
}
