use artifex_domain::constants::COMMAND_CONTRACT;
use artifex_domain::{ArtifactDescriptor, ArtifactKind, Feature, FeatureDefinition, Topology, TypeDescriptor};
use artifex_topology::{
    FeaturePath, NamespaceMapper, StructureConfiguration, TopologyError, TopologyResolver,
    resolve_topology,
};
use proptest::prelude::*;

fn artifact(name: &str, namespace: &str) -> ArtifactDescriptor {
    ArtifactDescriptor::new(
        ArtifactKind::Command,
        TypeDescriptor {
            name: name.to_owned(),
            namespace: namespace.to_owned(),
            module: "Shop.Domain".to_owned(),
            contracts: vec![COMMAND_CONTRACT.to_owned()],
            ..TypeDescriptor::default()
        },
    )
}

fn default_mapper(use_modules: bool) -> NamespaceMapper {
    NamespaceMapper::new(StructureConfiguration::default(), Vec::new(), use_modules)
}

fn chain(segments: &[&str]) -> FeaturePath {
    FeaturePath::new(None, segments.iter().map(|s| (*s).to_owned()).collect())
}

#[test]
fn including_two_formats_yields_two_formats() {
    let structure = StructureConfiguration::builder()
        .include("[.]FirstFormat")
        .include("[.]SecondFormat")
        .build()
        .expect("structure");

    assert_eq!(structure.formats().len(), 2);
}

#[test]
fn single_feature_path_without_previous_topology() {
    let mut resolver = TopologyResolver::new(Topology::default());
    let id = resolver.resolve(&FeaturePath::parse("Feature1")).expect("feature");
    let topology = resolver.finish();

    assert!(!id.is_nil());
    assert_eq!(topology.features.len(), 1);
    let feature = &topology.features[&id];
    assert_eq!(feature.name, "Feature1");
    assert!(feature.sub_features.is_empty());
}

#[test]
fn identical_chains_share_ids_within_a_run() {
    let mut resolver = TopologyResolver::new(Topology::default());
    let first = resolver.resolve(&chain(&["Carts", "Items"])).expect("first");
    let second = resolver.resolve(&chain(&["Carts", "Items"])).expect("second");
    let sibling = resolver.resolve(&chain(&["Carts", "Lines"])).expect("sibling");
    let topology = resolver.finish();

    assert_eq!(first, second);
    assert_ne!(first, sibling);
    assert_eq!(topology.features.len(), 1);
    assert_eq!(topology.all_features().len(), 3);
}

#[test]
fn ids_are_reused_only_for_exact_chains() {
    let mut resolver = TopologyResolver::new(Topology::default());
    let items = resolver.resolve(&chain(&["Carts", "Items"])).expect("items");
    let previous = resolver.finish();

    let mut resolver = TopologyResolver::new(previous);
    let again = resolver.resolve(&chain(&["Carts", "Items"])).expect("again");
    let moved = resolver.resolve(&chain(&["Orders", "Items"])).expect("moved");

    assert_eq!(items, again);
    assert_ne!(items, moved);
}

#[test]
fn orphaned_features_are_carried_over() {
    let mut previous = Topology::default();
    let orphan = Feature::new();
    previous.features.insert(orphan, FeatureDefinition::new("Legacy", vec!["Legacy".to_owned()]));

    let mut resolver = TopologyResolver::new(previous);
    resolver.resolve(&chain(&["Carts"])).expect("carts");
    let topology = resolver.finish();

    assert_eq!(topology.features.len(), 2);
    assert_eq!(topology.features[&orphan].name, "Legacy");
}

#[test]
fn modules_own_their_features() {
    let artifacts = vec![artifact("AddItem", "Domain.Shop.Carts"), artifact("Pay", "Domain.Billing.Invoices")];

    let resolved = resolve_topology(&artifacts, &default_mapper(true), Topology::default()).expect("resolve");

    assert_eq!(resolved.topology.modules.len(), 2);
    assert!(resolved.topology.features.is_empty());
    let (_, shop) = resolved.topology.module_named("Shop").expect("shop");
    let carts = resolved.feature_of(&artifacts[0]).expect("carts");
    assert!(shop.features.contains_key(&carts));
}

#[test]
fn unidentifiable_artifacts_are_batched() {
    let structure = StructureConfiguration::builder().include("Domain.{Feature}").build().expect("structure");
    let mapper = NamespaceMapper::new(structure, Vec::new(), false);
    let artifacts = vec![
        artifact("AddItem", "Domain.Carts"),
        artifact("Ship", "Logistics.Shipping"),
        artifact("Pay", "Billing.Invoices"),
    ];

    let err = resolve_topology(&artifacts, &mapper, Topology::default()).expect_err("unidentified");
    let TopologyError::UnableToIdentify { artifacts, .. } = err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(artifacts, vec!["Logistics.Shipping.Ship, Shop.Domain", "Billing.Invoices.Pay, Shop.Domain"]);
}

fn segment() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,6}"
}

proptest! {
    #[test]
    fn rerunning_with_the_previous_topology_keeps_ids(
        chains in proptest::collection::vec(proptest::collection::vec(segment(), 1..4), 1..8)
    ) {
        let paths: Vec<FeaturePath> = chains.iter().map(|c| FeaturePath::new(None, c.clone())).collect();

        let mut resolver = TopologyResolver::new(Topology::default());
        let first: Vec<_> = paths.iter().map(|p| resolver.resolve(p)).collect();
        let previous = resolver.finish();

        let mut resolver = TopologyResolver::new(previous.clone());
        let second: Vec<_> = paths.iter().map(|p| resolver.resolve(p)).collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(resolver.finish(), previous);
    }
}
