//! End-to-end tests for the four assembler entry points.
//!
//! Each test builds snapshots by hand, runs them through a `Projector`
//! backed by the in-memory `TypeRegistry`, and checks the resulting view.

use chrono::{TimeZone, Utc};
use metaview::properties::{DataStoreProperties, PersonProperties, ReferenceableProperties};
use metaview::types::*;
use metaview::{
    AnchorEnd, BucketKey, CompositeEdge, CompositeForm, CompositeParts, EffectiveWindow, ElementStub, ErrorKind, Guid,
    MetadataElement, Projector, ProjectorConfig, RelatedElement, Relationship, TargetShape, TypeRegistry,
    Value, VariantKind,
};
use pretty_assertions::assert_eq;

// ============================================================================
// Helpers
// ============================================================================

fn projector() -> Projector<TypeRegistry> {
    Projector::with_config(
        TypeRegistry::open_metadata(),
        ProjectorConfig::new("asset-manager").with_server_name("view-server"),
    )
}

/// A relationship seen from `anchor`, with the far element supplied.
fn related(
    anchor: &MetadataElement,
    guid: &str,
    type_name: &str,
    anchor_end: AnchorEnd,
    far: MetadataElement,
) -> RelatedElement {
    let rel = match anchor_end {
        AnchorEnd::End1 => Relationship::new(guid, type_name, anchor.stub(), far.stub()),
        AnchorEnd::End2 => Relationship::new(guid, type_name, far.stub(), anchor.stub()),
    };
    RelatedElement::from_anchor(&anchor.guid, rel, Some(far)).unwrap()
}

// ============================================================================
// 1. Known leaf type: named fields plus residual
// ============================================================================

#[test]
fn test_person_fields_and_residual() {
    let person = MetadataElement::new("p-guid", PERSON)
        .with_property("qualifiedName", "p1")
        .with_property("givenNames", "Ada")
        .with_property("unknownField", "x");

    let view = projector().element_view(TargetShape::Person, Some(&person), "getPerson").unwrap();

    assert_eq!(view.variant(), VariantKind::Person);
    let props = view.properties_as::<PersonProperties>().unwrap();
    assert_eq!(props.given_names.as_deref(), Some("Ada"));
    assert_eq!(props.actor_profile.referenceable.qualified_name.as_deref(), Some("p1"));
    assert_eq!(props.surname, None);

    let extended: Vec<(&str, &Value)> = view.extended_properties().iter().collect();
    assert_eq!(extended, vec![("unknownField", &Value::from("x"))]);
}

// ============================================================================
// 2. Unknown type: root variant, everything else residual
// ============================================================================

#[test]
fn test_unknown_type_falls_back_to_root() {
    let widget = MetadataElement::new("w-guid", "FutureWidget")
        .with_property("qualifiedName", "widget::1")
        .with_property("spin", 3)
        .with_property("colour", "teal");

    let view = projector().element_view(TargetShape::Element, Some(&widget), "getElement").unwrap();

    assert_eq!(view.variant(), VariantKind::Referenceable);
    assert_eq!(view.type_name(), "FutureWidget");
    let root = view.properties_as::<ReferenceableProperties>().unwrap();
    assert_eq!(root.qualified_name.as_deref(), Some("widget::1"));
    let keys: Vec<&str> = view.extended_properties().keys().collect();
    assert_eq!(keys, vec!["spin", "colour"]);
}

#[test]
fn test_unknown_type_rejected_by_specific_shape() {
    let widget = MetadataElement::new("w-guid", "FutureWidget");
    let err = projector().element_view(TargetShape::Asset, Some(&widget), "getAsset").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidTargetShape);
    assert_eq!(err.shape(), Some(TargetShape::Asset));
}

// ============================================================================
// 3. Relationship buckets
// ============================================================================

#[test]
fn test_action_target_and_external_reference_buckets() {
    let anchor = MetadataElement::new("anchor", ASSET);
    let todo = MetadataElement::new("todo-1", TO_DO).with_property("name", "fix schema");
    let doc = MetadataElement::new("doc-1", EXTERNAL_REFERENCE).with_property("url", "https://example.org/orders-schema");

    let relationships = vec![
        related(&anchor, "R1", ACTION_TARGET, AnchorEnd::End1, todo),
        related(&anchor, "R2", EXTERNAL_REFERENCE_LINK, AnchorEnd::End2, doc),
    ];

    let view = projector()
        .full_view(TargetShape::Asset, Some(&anchor), None, Some(&relationships), "getAssetGraph")
        .unwrap();
    let buckets = view.related.as_ref().unwrap();

    let targets: Vec<&Guid> = buckets.action_targets().iter().map(|s| s.related_guid()).collect();
    let refs: Vec<&Guid> = buckets.external_references().iter().map(|s| s.related_guid()).collect();
    assert_eq!(targets, vec![&Guid::from("todo-1")]);
    assert_eq!(refs, vec![&Guid::from("doc-1")]);
    assert!(buckets.other().is_empty());
    assert_eq!(buckets.total(), relationships.len());
    assert_eq!(buckets.rule_set, "asset");
}

#[test]
fn test_action_target_direction_is_never_mixed() {
    let anchor = MetadataElement::new("anchor", TO_DO);
    let relationships = vec![
        related(&anchor, "R1", ACTION_TARGET, AnchorEnd::End1, MetadataElement::new("a", ASSET)),
        related(&anchor, "R2", ACTION_TARGET, AnchorEnd::End2, MetadataElement::new("b", PROJECT)),
        related(&anchor, "R3", ACTION_TARGET, AnchorEnd::End1, MetadataElement::new("c", ASSET)),
    ];

    let view = projector()
        .full_view(TargetShape::ToDo, Some(&anchor), None, Some(&relationships), "getToDo")
        .unwrap();
    let buckets = view.related.unwrap();

    assert!(buckets.action_targets().iter().all(|s| s.anchor_end == AnchorEnd::End1));
    assert!(buckets.action_sources().iter().all(|s| s.anchor_end == AnchorEnd::End2));
    assert_eq!(buckets.action_targets().len(), 2);
    assert_eq!(buckets.action_sources().len(), 1);
}

#[test]
fn test_project_context_routes_resource_list_differently() {
    let project = MetadataElement::new("proj", PROJECT).with_property("name", "Clinical trial");
    let asset = MetadataElement::new("proj-asset", "Asset");
    let relationships = vec![related(&project, "R1", RESOURCE_LIST, AnchorEnd::End1, asset)];

    let p = projector();
    let as_project = p
        .full_view(TargetShape::Project, Some(&project), None, Some(&relationships), "getProject")
        .unwrap();
    let as_element = p
        .full_view(TargetShape::Element, Some(&project), None, Some(&relationships), "getElement")
        .unwrap();

    assert_eq!(as_project.related.unwrap().get(&BucketKey::PROJECT_RESOURCES).len(), 1);
    assert_eq!(as_element.related.unwrap().get(&BucketKey::RESOURCE_LIST).len(), 1);
}

// ============================================================================
// 4. Missing inputs
// ============================================================================

#[test]
fn test_missing_element_names_shape() {
    let err = projector().element_view(TargetShape::Person, None, "getPersonByGUID").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingInstance);
    assert_eq!(err.kind().code(), "MISSING_INSTANCE");
    assert_eq!(err.method(), Some("getPersonByGUID"));
    let msg = err.to_string();
    assert!(msg.contains("PersonView"), "{msg}");
    assert!(msg.contains("asset-manager@view-server"), "{msg}");
}

#[test]
fn test_missing_element_in_every_entry_point() {
    let p = projector();
    let parts = CompositeParts::new(CompositeForm::MemberGraph);
    let results = [
        p.element_view(TargetShape::Collection, None, "a").map(|_| ()),
        p.related_view(TargetShape::Collection, None, None, "b").map(|_| ()),
        p.full_view(TargetShape::Collection, None, None, None, "c").map(|_| ()),
        p.composite_view(TargetShape::Collection, None, None, parts, "d").map(|_| ()),
    ];
    for result in results {
        assert_eq!(result.unwrap_err().kind(), ErrorKind::MissingInstance);
    }
}

// ============================================================================
// 5. How reached
// ============================================================================

#[test]
fn test_full_view_keeps_reached_by() {
    let store = MetadataElement::new("store", "CSVFile")
        .with_property("name", "orders.csv")
        .with_property("storeCreateTime", 1_700_000_000_000_i64);
    let reached = Relationship::new("hop", DATA_FLOW, ElementStub::new("etl", PROCESS), store.stub())
        .with_property("formula", "copy");

    let view = projector()
        .full_view(TargetShape::Asset, Some(&store), Some(&reached), None, "getLineage")
        .unwrap();

    let link = view.reached_by.as_ref().unwrap();
    assert_eq!(link.guid, Guid::from("hop"));
    assert_eq!(link.element_end, Some(AnchorEnd::End2));
    assert_eq!(view.variant(), VariantKind::DataStore);
    assert_eq!(view.type_name(), "CSVFile");

    let props = view.properties_as::<DataStoreProperties>().unwrap();
    assert!(props.store_create_time.is_some());
    assert_eq!(props.asset.name.as_deref(), Some("orders.csv"));
    assert!(view.related.as_ref().unwrap().is_empty());
}

#[test]
fn test_reached_by_carries_effective_window() {
    let from = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
    let window = EffectiveWindow::between(Some(from), Some(to));

    let store = MetadataElement::new("store", "CSVFile");
    let reached = Relationship::new("hop", DATA_FLOW, ElementStub::new("etl", PROCESS), store.stub())
        .with_effective(window);

    let p = projector();
    let full = p
        .full_view(TargetShape::Asset, Some(&store), Some(&reached), None, "getLineage")
        .unwrap();
    let related = p
        .related_view(TargetShape::Asset, Some(&store), Some(&reached), "getLineage")
        .unwrap();

    for view in [&full, &related] {
        let link = view.reached_by.as_ref().unwrap();
        assert_eq!(link.effective, window);
        assert!(!link.effective.is_unbounded());
        assert!(link.effective.contains(Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap()));
    }
    // The element's own window is left alone.
    assert!(full.header.effective.is_unbounded());
}

// ============================================================================
// 6. Composite parts are attached unchanged
// ============================================================================

#[test]
fn test_composite_member_graph_attached_unchanged() {
    let p = projector();
    let collection = MetadataElement::new("coll", COLLECTION).with_property("name", "Favourites");
    let member = MetadataElement::new("m1", GLOSSARY_TERM).with_property("displayName", "Customer");
    let member_view = p.element_view(TargetShape::Element, Some(&member), "getMember").unwrap();

    let parts = CompositeParts::new(CompositeForm::MemberGraph)
        .with_node(member_view.clone())
        .with_edge(CompositeEdge {
            relationship: Guid::from("cm1"),
            type_name: COLLECTION_MEMBERSHIP.to_owned(),
            from: Guid::from("coll"),
            to: Guid::from("m1"),
            label: None,
        });
    let relationships = vec![related(&collection, "cm1", COLLECTION_MEMBERSHIP, AnchorEnd::End1, member)];

    let view = p
        .composite_view(TargetShape::Collection, Some(&collection), Some(&relationships), parts.clone(), "getCollectionGraph")
        .unwrap();

    assert_eq!(view.composite.as_ref(), Some(&parts));
    assert_eq!(view.composite.as_ref().unwrap().node(&Guid::from("m1")), Some(&member_view));
    assert_eq!(view.related.unwrap().members().len(), 1);
}

#[test]
fn test_composite_form_not_offered_by_shape() {
    let person = MetadataElement::new("p", PERSON);
    let err = projector()
        .composite_view(TargetShape::Person, Some(&person), None, CompositeParts::new(CompositeForm::Hierarchy), "getGraph")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
}

// ============================================================================
// 7. Idempotence and input isolation
// ============================================================================

#[test]
fn test_same_inputs_same_view() {
    let p = projector();
    let anchor = MetadataElement::new("term", GLOSSARY_TERM)
        .with_property("displayName", "Customer")
        .with_property("steward", "ops");
    let relationships = vec![
        related(&anchor, "s1", SEMANTIC_ASSIGNMENT, AnchorEnd::End2, MetadataElement::new("col", "Column")),
        related(&anchor, "t1", ATTACHED_TAG, AnchorEnd::End1, MetadataElement::new("tag", "InformalTag")),
    ];
    let before = anchor.clone();

    let first = p.full_view(TargetShape::GlossaryTerm, Some(&anchor), None, Some(&relationships), "get").unwrap();
    let second = p.full_view(TargetShape::GlossaryTerm, Some(&anchor), None, Some(&relationships), "get").unwrap();

    assert_eq!(first, second);
    assert_eq!(anchor, before);
}

#[test]
fn test_view_serializes_camel_case() {
    let person = MetadataElement::new("p-guid", PERSON)
        .with_property("qualifiedName", "p1")
        .with_property("givenNames", "Ada");
    let view = projector().element_view(TargetShape::Person, Some(&person), "getPerson").unwrap();

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["header"]["typeName"], "Person");
    assert_eq!(json["properties"]["class"], "Person");
    assert_eq!(json["properties"]["givenNames"], "Ada");
    assert_eq!(json["properties"]["qualifiedName"], "p1");
    assert!(json.get("related").is_none());
}
